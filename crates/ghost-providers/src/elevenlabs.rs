//! ElevenLabs text-to-speech client.

use std::time::Duration;

use ghost_config::ElevenLabsConfig;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;

use crate::error::ProviderError;
use crate::http::{build_client, check_response, endpoint, secret_header};

#[derive(Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct ElevenLabsClient {
    http: reqwest::Client,
    base_url: String,
    voice_id: String,
    model_id: String,
}

impl ElevenLabsClient {
    /// Build from the `[elevenlabs]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotConfigured`] unless both key and voice are set.
    pub fn from_config(config: &ElevenLabsConfig, timeout: Duration) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::NotConfigured("elevenlabs.api_key"));
        }
        if config.voice_id.trim().is_empty() {
            return Err(ProviderError::NotConfigured("elevenlabs.voice_id"));
        }

        let mut headers = HeaderMap::new();
        headers.insert("xi-api-key", secret_header("elevenlabs.api_key", &config.api_key)?);
        headers.insert(ACCEPT, HeaderValue::from_static("audio/mpeg"));
        Ok(Self {
            http: build_client(headers, timeout)?,
            base_url: config.base_url.clone(),
            voice_id: config.voice_id.clone(),
            model_id: config.model_id.clone(),
        })
    }

    /// Synthesize `text` and return the `audio/mpeg` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, a non-2xx status, or
    /// an empty audio body.
    pub async fn speak(&self, text: &str) -> Result<Vec<u8>, ProviderError> {
        let url = endpoint(
            &self.base_url,
            &format!("/v1/text-to-speech/{}", self.voice_id),
        );
        let resp = self
            .http
            .post(url)
            .json(&SpeechRequest {
                text,
                model_id: &self.model_id,
            })
            .send()
            .await?;

        let audio = check_response(resp).await?.bytes().await?;
        if audio.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        tracing::debug!(bytes = audio.len(), "synthesized speech");
        Ok(audio.to_vec())
    }
}
