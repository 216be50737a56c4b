//! # ghost-config
//!
//! Layered configuration loading for Kanban Ghost using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KGHOST_*` prefix, `__` as separator)
//! 2. Conventional vendor variables (`OPENAI_API_KEY`, `ANTHROPIC_API_KEY`,
//!    `ELEVEN_API_KEY`, `ELEVEN_VOICE_ID`, `PORT`)
//! 3. Project-level `.kghost/config.toml`
//! 4. User-level `~/.config/kghost/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KGHOST_OPENAI__API_KEY` -> `openai.api_key`,
//! `KGHOST_GENERAL__STUDY_MODE` -> `general.study_mode`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ghost_config::GhostConfig;
//!
//! let config = GhostConfig::load_with_dotenv().expect("config");
//! let flags = config.engine_flags();
//! if !flags.has_suggestion_provider {
//!     println!("running on heuristics only");
//! }
//! ```

mod anthropic;
mod elevenlabs;
mod error;
mod general;
mod openai;
mod server;

pub use anthropic::AnthropicConfig;
pub use elevenlabs::ElevenLabsConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use openai::OpenAiConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unprefixed variables the hosted deployments already export.
const VENDOR_ENV: [(&str, &str); 5] = [
    ("OPENAI_API_KEY", "openai.api_key"),
    ("ANTHROPIC_API_KEY", "anthropic.api_key"),
    ("ELEVEN_API_KEY", "elevenlabs.api_key"),
    ("ELEVEN_VOICE_ID", "elevenlabs.voice_id"),
    ("PORT", "server.port"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GhostConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub anthropic: AnthropicConfig,
    #[serde(default)]
    pub elevenlabs: ElevenLabsConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

/// Which collaborators the engine may call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineFlags {
    pub has_conversational_provider: bool,
    pub has_suggestion_provider: bool,
}

impl GhostConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".kghost/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(Self::vendor_env())
            .merge(Env::prefixed("KGHOST_").split("__"))
    }

    /// Maps the conventional unprefixed vendor variables onto config keys.
    fn vendor_env() -> Env {
        Env::raw().filter_map(|key| {
            VENDOR_ENV
                .iter()
                .find(|(var, _)| key == *var)
                .map(|(_, path)| (*path).into())
        })
    }

    /// Reject values that would only fail later, deep inside a request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.provider_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.provider_timeout_secs".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        let slot = self.general.slot.trim();
        if slot.is_empty() || slot.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "general.slot".into(),
                reason: format!("'{slot}' is not a plain file name"),
            });
        }
        Ok(())
    }

    /// Any configured chat vendor can both pick tasks and answer questions.
    pub fn engine_flags(&self) -> EngineFlags {
        let has_chat = self.anthropic.is_configured() || self.openai.is_configured();
        EngineFlags {
            has_conversational_provider: has_chat,
            has_suggestion_provider: has_chat,
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kghost").join("config.toml"))
    }

    /// Load `.env` from the current directory or its ancestors. Silently does
    /// nothing if none is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_providers() {
        let config = GhostConfig::default();
        assert_eq!(config.engine_flags(), EngineFlags::default());
        assert!(!config.elevenlabs.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn either_chat_vendor_enables_the_engine() {
        let mut config = GhostConfig::default();
        config.openai.api_key = "sk-test".into();
        let flags = config.engine_flags();
        assert!(flags.has_conversational_provider);
        assert!(flags.has_suggestion_provider);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = GhostConfig::default();
        config.general.provider_timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "general.provider_timeout_secs"
        ));
    }

    #[test]
    fn slot_with_path_separator_is_rejected() {
        let mut config = GhostConfig::default();
        config.general.slot = "../escape".into();
        assert!(config.validate().is_err());
    }
}
