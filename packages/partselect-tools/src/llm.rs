//! Hosted completion model.
//!
//! The extractors only need single-turn chat: one system instruction, one
//! user message, one text answer. [`CompletionModel`] is that seam;
//! [`OpenAIChat`] is the production implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::config::{Config, DEFAULT_MODEL, DEFAULT_OPENAI_BASE_URL};
use crate::error::{Error, Result};

/// Single-turn chat completion.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Send `system` + `user` and return the raw text of the first choice.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role: "system", "user", "assistant"
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    // null when the model refuses
    content: Option<String>,
}

/// OpenAI chat-completions client.
#[derive(Clone)]
pub struct OpenAIChat {
    http_client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIChat {
    /// Create a client with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }

    /// Build from [`Config`]; fails if no API key is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.require_api_key()?;
        Ok(Self::new(api_key)
            .with_model(&config.openai_model)
            .with_base_url(&config.openai_base_url)
            .with_timeout(config.timeout)?)
    }

    /// Set the chat model (default: gpt-4o-mini).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CompletionModel for OpenAIChat {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let start = Instant::now();
        let request = ChatRequest {
            model: &self.model,
            messages: vec![Message::system(system), Message::user(user)],
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                Error::Completion(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(Error::Completion(format!("OpenAI API error {}: {}", status, error_text)));
        }

        let chat_response: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| Error::Completion(e.to_string()))?;

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            "OpenAI chat completion"
        );

        first_content(chat_response)
    }
}

fn first_content(response: ChatResponseRaw) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content.unwrap_or_default())
        .ok_or_else(|| Error::Completion("No response from OpenAI".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = OpenAIChat::new("sk-test")
            .with_model("gpt-4o")
            .with_base_url("https://custom.api.com/v1/");

        assert_eq!(client.api_key, "sk-test");
        assert_eq!(client.model(), "gpt-4o");
        assert_eq!(client.base_url(), "https://custom.api.com/v1");
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = Config::default();
        assert!(matches!(OpenAIChat::from_config(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![Message::system("extract"), Message::user("part W10321304")],
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "part W10321304");
    }

    #[test]
    fn test_first_content() {
        let raw: ChatResponseRaw = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "W10321304"}}]}"#,
        )
        .unwrap();
        assert_eq!(first_content(raw).unwrap(), "W10321304");

        let empty: ChatResponseRaw = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(first_content(empty), Err(Error::Completion(_))));

        let null: ChatResponseRaw =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert_eq!(first_content(null).unwrap(), "");
    }
}
