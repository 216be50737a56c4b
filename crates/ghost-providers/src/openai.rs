//! OpenAI Chat Completions client.

use std::time::Duration;

use async_trait::async_trait;
use ghost_config::OpenAiConfig;
use reqwest::header::{AUTHORIZATION, HeaderMap};
use serde::{Deserialize, Serialize};

use crate::chat::{ChatBackend, ChatRequest};
use crate::error::ProviderError;
use crate::http::{build_client, check_response, endpoint, secret_header};

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Build from the `[openai]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotConfigured`] without an API key.
    pub fn from_config(config: &OpenAiConfig, timeout: Duration) -> Result<Self, ProviderError> {
        if !config.is_configured() {
            return Err(ProviderError::NotConfigured("openai.api_key"));
        }
        Self::with_config(&config.api_key, &config.base_url, &config.model, timeout)
    }

    /// Build with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the key is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn with_config(
        api_key: &str,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            secret_header("openai.api_key", &format!("Bearer {api_key}"))?,
        );
        Ok(Self {
            http: build_client(headers, timeout)?,
            base_url: base_url.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl ChatBackend for OpenAiClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, req: &ChatRequest) -> Result<String, ProviderError> {
        let body = CompletionRequest {
            model: &self.model,
            messages: [
                Message {
                    role: "system",
                    content: &req.system,
                },
                Message {
                    role: "user",
                    content: &req.user,
                },
            ],
            temperature: req.temperature,
            max_tokens: req.max_tokens,
        };

        let resp = self
            .http
            .post(endpoint(&self.base_url, "/v1/chat/completions"))
            .json(&body)
            .send()
            .await?;
        let data: CompletionResponse = check_response(resp).await?.json().await?;

        let text = data
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }
}
