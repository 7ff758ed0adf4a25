use serde::{Deserialize, Serialize};
use tracing::{instrument, Level};

use crate::config::OpenAiConfig;

pub const HAIKU_FALLBACK: &str = "No haiku today";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PromptKind {
    /// Rewrite the text for clarity.
    Improve,
    /// A 3-5 word gist.
    Summarize,
    /// A three line poem about the main ingredient.
    Haiku,
}

impl PromptKind {
    pub fn prompt(self, input: &str) -> String {
        match self {
            Self::Improve => format!("Forbedre teksten og returner kun resultatet: {input}"),
            Self::Summarize => {
                format!("Lag en oppsummering på 3-5 ord og returner kun resultatet: {input}")
            }
            Self::Haiku => format!(
                "Skriv en haiku om hovedingrediensen og returner kun resultatet: {input}"
            ),
        }
    }

    /// What to use when the service has nothing to say.
    pub fn fallback(self, input: &str) -> String {
        match self {
            Self::Improve | Self::Summarize => input.to_owned(),
            Self::Haiku => HAIKU_FALLBACK.to_owned(),
        }
    }
}

/// A text generation service. `None` means the service produced nothing.
pub trait Enricher {
    async fn enrich(&self, kind: PromptKind, input: &str) -> Option<String>;
}

/// Enriches `input`, falling back to [`PromptKind::fallback`] when the service comes back empty.
pub async fn enrich_or_fallback<E: Enricher>(enricher: &E, kind: PromptKind, input: &str) -> String {
    match enricher.enrich(kind, input).await {
        Some(text) if !text.trim().is_empty() => text.trim().to_owned(),
        _ => {
            log::warn!("No {kind:?} text returned, using fallback");
            kind.fallback(input)
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage; 1],
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl ChatResponse {
    fn into_text(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

/// Chat completions client for the OpenAI api.
#[derive(Debug, Clone)]
pub struct OpenAi {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAi {
    pub fn new(client: reqwest::Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    async fn complete(&self, prompt: String) -> Result<Option<String>, reqwest::Error> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user".to_string(),
                content: Some(prompt),
            }],
        };
        let response: ChatResponse = self
            .client
            .post(self.config.url.clone())
            .bearer_auth(self.config.api_key.expose())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.into_text())
    }
}

impl Enricher for OpenAi {
    #[instrument(skip(self, input), level = Level::DEBUG)]
    async fn enrich(&self, kind: PromptKind, input: &str) -> Option<String> {
        match self.complete(kind.prompt(input)).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Enrichment request failed: {e}");
                None
            }
        }
    }
}
