use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_LOG_FILTER: &str = "botdesk=debug,botdesk_core=debug,botdesk_store=debug";

/// Serialized settings from ~/.botdesk/config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage file to use instead of the platform data directory.
    pub storage_path: Option<PathBuf>,
    /// Program and arguments that receive copied text on stdin.
    pub clipboard_command: Option<Vec<String>>,
    /// `tracing` filter applied with `--verbose`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: None,
            clipboard_command: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Helper struct for storing the location to read/write global settings
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(".botdesk");
        path.push("config.json");
        Self { path }
    }

    /// Use a specific config file (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the user's saved config, or fallback to Default
    pub fn load(&self) -> Config {
        if let Ok(content) = fs::read_to_string(&self.path) {
            match serde_json::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "ignoring invalid config")
                }
            }
        }
        Config::default()
    }

    /// Save the user's config back to disk
    pub fn save(&self, config: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
    }
}
