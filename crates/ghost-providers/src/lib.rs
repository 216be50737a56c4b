//! # ghost-providers
//!
//! HTTP clients for the vendors Kanban Ghost can lean on:
//! - Anthropic Messages API (preferred when configured)
//! - OpenAI Chat Completions
//! - ElevenLabs text-to-speech
//!
//! The chat vendors sit behind [`ChatBackend`] and are adapted to the engine's
//! collaborator traits by [`GhostAssistant`]. Nothing here retries or falls
//! back; the engine owns timeouts and fallbacks.

pub mod anthropic;
pub mod assistant;
pub mod chat;
pub mod elevenlabs;
pub mod openai;
pub mod prompts;

mod error;
mod http;

pub use anthropic::AnthropicClient;
pub use assistant::GhostAssistant;
pub use chat::{ChatBackend, ChatRequest};
pub use elevenlabs::ElevenLabsClient;
pub use error::ProviderError;
pub use openai::OpenAiClient;

use std::sync::Arc;

use ghost_config::GhostConfig;

/// Build the chat assistant from config: Anthropic if configured, else
/// OpenAI, else `None` (heuristics only).
///
/// # Errors
///
/// Returns [`ProviderError`] if a configured vendor's client cannot be built.
pub fn assistant_from_config(config: &GhostConfig) -> Result<Option<GhostAssistant>, ProviderError> {
    let timeout = config.general.provider_timeout();
    let backend: Arc<dyn ChatBackend> = if config.anthropic.is_configured() {
        Arc::new(AnthropicClient::from_config(&config.anthropic, timeout)?)
    } else if config.openai.is_configured() {
        Arc::new(OpenAiClient::from_config(&config.openai, timeout)?)
    } else {
        return Ok(None);
    };
    tracing::debug!(backend = backend.name(), "chat assistant ready");
    Ok(Some(GhostAssistant::new(backend)))
}

/// Build the speech client, or `None` when key or voice is missing.
///
/// # Errors
///
/// Returns [`ProviderError`] if the configured client cannot be built.
pub fn speech_from_config(config: &GhostConfig) -> Result<Option<ElevenLabsClient>, ProviderError> {
    if !config.elevenlabs.is_configured() {
        return Ok(None);
    }
    ElevenLabsClient::from_config(&config.elevenlabs, config.general.provider_timeout()).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_means_no_assistant() {
        assert!(assistant_from_config(&GhostConfig::default()).unwrap().is_none());
        assert!(speech_from_config(&GhostConfig::default()).unwrap().is_none());
    }

    #[test]
    fn anthropic_is_preferred() {
        let mut config = GhostConfig::default();
        config.openai.api_key = "sk-openai".into();
        config.anthropic.api_key = "sk-ant".into();
        let assistant = assistant_from_config(&config).unwrap().unwrap();
        assert_eq!(assistant.backend_name(), "anthropic");

        config.anthropic.api_key.clear();
        let assistant = assistant_from_config(&config).unwrap().unwrap();
        assert_eq!(assistant.backend_name(), "openai");
    }
}
