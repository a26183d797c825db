use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Overrides `~/.config/bizrecovery/preferences.ron`.
    pub preferences_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            preferences_path: None,
        }
    }
}
