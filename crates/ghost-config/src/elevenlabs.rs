//! ElevenLabs text-to-speech configuration.

use serde::{Deserialize, Serialize};

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_string()
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElevenLabsConfig {
    /// API key. Also read from `ELEVEN_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Voice to synthesize with. Also read from `ELEVEN_VOICE_ID`.
    #[serde(default)]
    pub voice_id: String,

    #[serde(default = "default_model_id")]
    pub model_id: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            voice_id: String::new(),
            model_id: default_model_id(),
            base_url: default_base_url(),
        }
    }
}

impl ElevenLabsConfig {
    /// Speech needs both a key and a voice.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.voice_id.trim().is_empty()
    }
}
