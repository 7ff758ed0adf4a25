use std::{env, fmt};

use chrono::{Local, NaiveDate};
use url::Url;

use crate::{error::Error, parse::WeekdayLabels};

pub const DEFAULT_MENU_URL: &str = "https://lunsjboxen.no/ukens-meny/";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// A value that must never end up in the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub url: Url,
    pub model: String,
    pub api_key: Secret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub menu_url: Url,
    pub slack_hook: Url,
    pub openai: OpenAiConfig,
    pub labels: WeekdayLabels,
    /// Overrides the date the run looks up the menu for.
    pub date: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("env var {key} is not set")))
        };
        let parse_url = |key: &str, value: &str| {
            Url::parse(value).map_err(|e| Error::Config(format!("{key} is not a valid url: {e}")))
        };

        let slack_hook = parse_url("SLACK_HOOK", &required("SLACK_HOOK")?)?;
        let api_key = Secret(required("OPENAI_SECRET")?);

        let menu_url = match lookup("MENU_URL") {
            Some(v) => parse_url("MENU_URL", &v)?,
            None => parse_url("MENU_URL", DEFAULT_MENU_URL)?,
        };
        let openai_url = match lookup("OPENAI_URL") {
            Some(v) => parse_url("OPENAI_URL", &v)?,
            None => parse_url("OPENAI_URL", DEFAULT_OPENAI_URL)?,
        };
        let model = lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());

        let labels = match lookup("MENU_LANGUAGE") {
            Some(v) => v.parse::<WeekdayLabels>().map_err(Error::Config)?,
            None => WeekdayLabels::default(),
        };
        let date = lookup("MENU_DATE")
            .map(|v| {
                NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                    .map_err(|e| Error::Config(format!("MENU_DATE {v:?} is not a date: {e}")))
            })
            .transpose()?;

        Ok(Self {
            menu_url,
            slack_hook,
            openai: OpenAiConfig {
                url: openai_url,
                model,
                api_key,
            },
            labels,
            date,
        })
    }

    /// The date to post the menu for, today unless overridden.
    pub fn reference_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}
