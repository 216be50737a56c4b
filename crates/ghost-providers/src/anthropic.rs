//! Anthropic Messages API client.

use std::time::Duration;

use async_trait::async_trait;
use ghost_config::AnthropicConfig;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::chat::{ChatBackend, ChatRequest};
use crate::error::ProviderError;
use crate::http::{build_client, check_response, endpoint, secret_header};

const API_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Clone)]
pub struct AnthropicClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl AnthropicClient {
    /// Build from the `[anthropic]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotConfigured`] without an API key.
    pub fn from_config(config: &AnthropicConfig, timeout: Duration) -> Result<Self, ProviderError> {
        if !config.is_configured() {
            return Err(ProviderError::NotConfigured("anthropic.api_key"));
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
        headers.insert("x-api-key", secret_header("anthropic.api_key", api_key)?);
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        Ok(Self {
            http: build_client(headers, timeout)?,
            base_url: base_url.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl ChatBackend for AnthropicClient {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(&self, req: &ChatRequest) -> Result<String, ProviderError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: req.max_tokens,
            temperature: req.temperature,
            system: &req.system,
            messages: [Message {
                role: "user",
                content: &req.user,
            }],
        };

        let resp = self
            .http
            .post(endpoint(&self.base_url, "/v1/messages"))
            .json(&body)
            .send()
            .await?;
        let data: MessagesResponse = check_response(resp).await?.json().await?;

        let text = data
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text.trim().to_string())
            .unwrap_or_default();
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }
}
