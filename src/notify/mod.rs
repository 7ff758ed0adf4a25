use chrono::{Datelike, Weekday};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{instrument, Level};
use url::Url;

use crate::{enrich::HAIKU_FALLBACK, error::Error, menu::MenuEntry};

pub const MONDAY_LABEL: &str = "Monday's";
pub const TOMORROW_LABEL: &str = "Tomorrow's";

/// The payload posted to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub menu_text: String,
    pub allergen_text: String,
    pub next_day_summary: String,
    pub haiku: String,
    pub next_day_label: String,
}

/// "Monday's" when the next menu is after a weekend, otherwise "Tomorrow's".
pub fn label_for(next: &MenuEntry) -> &'static str {
    if next.date().weekday() == Weekday::Mon {
        MONDAY_LABEL
    } else {
        TOMORROW_LABEL
    }
}

pub fn present(
    today_text: String,
    today_allergens: &str,
    next_summary: String,
    haiku: Option<String>,
    next: &MenuEntry,
) -> OutboundMessage {
    OutboundMessage {
        menu_text: today_text,
        allergen_text: today_allergens.to_owned(),
        next_day_summary: next_summary,
        haiku: haiku
            .filter(|x| !x.trim().is_empty())
            .unwrap_or_else(|| HAIKU_FALLBACK.to_owned()),
        next_day_label: label_for(next).to_owned(),
    }
}

/// Where the finished message is delivered.
pub trait MessageSink {
    async fn post(&self, message: &OutboundMessage) -> crate::Result<StatusCode>;
}

/// A Slack workflow webhook taking the message fields as variables.
#[derive(Debug, Clone)]
pub struct SlackWebhook {
    client: reqwest::Client,
    url: Url,
}

impl SlackWebhook {
    pub fn new(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }
}

impl MessageSink for SlackWebhook {
    #[instrument(skip_all, level = Level::DEBUG)]
    async fn post(&self, message: &OutboundMessage) -> crate::Result<StatusCode> {
        log::debug!("Posting {}", serde_json::to_string(message)?);
        let response = self
            .client
            .post(self.url.clone())
            .json(message)
            .send()
            .await?;
        Ok(response.status())
    }
}

/// Posts `message` once, treating any non-success status as a failed delivery.
pub async fn deliver<S: MessageSink>(sink: &S, message: &OutboundMessage) -> crate::Result<()> {
    let status = sink.post(message).await?;
    if status.is_success() {
        log::info!("Call to slack api returned {status}");
        Ok(())
    } else {
        log::error!("Call to slack api returned {status}");
        Err(Error::Delivery(status))
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDate;

    use super::*;

    /// Records every message and answers with a fixed status.
    #[derive(Debug)]
    pub struct RecordingSink {
        pub status: StatusCode,
        pub posted: Mutex<Vec<OutboundMessage>>,
    }

    impl RecordingSink {
        pub fn new(status: StatusCode) -> Self {
            Self {
                status,
                posted: Mutex::new(Vec::new()),
            }
        }
    }

    impl MessageSink for RecordingSink {
        async fn post(&self, message: &OutboundMessage) -> crate::Result<StatusCode> {
            self.posted.lock().unwrap().push(message.clone());
            Ok(self.status)
        }
    }

    fn entry(y: i32, m: u32, d: u32) -> MenuEntry {
        MenuEntry::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), "Dag", Some("Mat"), None)
    }

    #[test]
    fn test_label_for() {
        // 2024-03-18 is a Monday
        assert_eq!(label_for(&entry(2024, 3, 18)), MONDAY_LABEL);
        assert_eq!(label_for(&entry(2024, 3, 25)), MONDAY_LABEL);
        for day in 19..=24 {
            assert_eq!(label_for(&entry(2024, 3, day)), TOMORROW_LABEL);
        }
    }

    #[test]
    fn test_present() {
        let next = entry(2024, 3, 25);
        let message = present(
            "Taco med salsa".to_string(),
            "Allergener: melk",
            "Lasagne".to_string(),
            Some("Mais i skallet".to_string()),
            &next,
        );
        assert_eq!(
            message,
            OutboundMessage {
                menu_text: "Taco med salsa".to_string(),
                allergen_text: "Allergener: melk".to_string(),
                next_day_summary: "Lasagne".to_string(),
                haiku: "Mais i skallet".to_string(),
                next_day_label: MONDAY_LABEL.to_string(),
            }
        );
    }

    #[test]
    fn test_present_haiku_fallback() {
        let next = entry(2024, 3, 19);
        let message = present(String::new(), "", String::new(), None, &next);
        assert_eq!(message.haiku, HAIKU_FALLBACK);
        assert_eq!(message.next_day_label, TOMORROW_LABEL);
        let message = present(String::new(), "", String::new(), Some("  ".to_string()), &next);
        assert_eq!(message.haiku, HAIKU_FALLBACK);
    }

    #[test]
    fn test_message_fields() {
        let message = present(
            "a".to_string(),
            "b",
            "c".to_string(),
            Some("d".to_string()),
            &entry(2024, 3, 19),
        );
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({
                "menuText": "a",
                "allergenText": "b",
                "nextDaySummary": "c",
                "haiku": "d",
                "nextDayLabel": "Tomorrow's",
            })
        );
    }

    #[tokio::test]
    async fn test_deliver() {
        let message = present(String::new(), "", String::new(), None, &entry(2024, 3, 19));
        let ok = RecordingSink::new(StatusCode::OK);
        deliver(&ok, &message).await.unwrap();
        assert_eq!(ok.posted.lock().unwrap().len(), 1);

        let failing = RecordingSink::new(StatusCode::BAD_REQUEST);
        let err = deliver(&failing, &message).await.unwrap_err();
        assert!(matches!(err, Error::Delivery(status) if status == StatusCode::BAD_REQUEST));
        // no retry
        assert_eq!(failing.posted.lock().unwrap().len(), 1);
    }
}
