//! General application configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_slot() -> String {
    "kg_tasks".to_string()
}

const fn default_provider_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding board files. Empty means the platform data dir.
    #[serde(default)]
    pub data_dir: String,

    /// Name of the board file inside `data_dir`, without extension.
    #[serde(default = "default_slot")]
    pub slot: String,

    /// A new task is promoted straight to `doing` when nothing is in progress.
    #[serde(default)]
    pub study_mode: bool,

    /// Bound on each vendor call before the fallback kicks in.
    #[serde(default = "default_provider_timeout_secs")]
    pub provider_timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            slot: default_slot(),
            study_mode: false,
            provider_timeout_secs: default_provider_timeout_secs(),
        }
    }
}

impl GeneralConfig {
    pub fn data_dir(&self) -> PathBuf {
        if self.data_dir.is_empty() {
            dirs::data_local_dir()
                .map_or_else(|| PathBuf::from(".kghost"), |dir| dir.join("kghost"))
        } else {
            PathBuf::from(&self.data_dir)
        }
    }

    /// `<data_dir>/<slot>.json`
    pub fn board_path(&self) -> PathBuf {
        self.data_dir().join(format!("{}.json", self.slot))
    }

    pub const fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(!config.study_mode);
        assert_eq!(config.slot, "kg_tasks");
        assert_eq!(config.provider_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn board_path_uses_slot() {
        let config = GeneralConfig {
            data_dir: "/tmp/boards".into(),
            slot: "work".into(),
            ..Default::default()
        };
        assert_eq!(config.board_path(), PathBuf::from("/tmp/boards/work.json"));
    }
}
