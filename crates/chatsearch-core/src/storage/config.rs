//! Configuration management
//!
//! Settings live in `~/.config/chatsearch/config.toml` unless a directory is
//! given on the command line. A missing file yields the defaults.
//! The log level may also come from the CHATSEARCH_LOG environment variable.

use super::Result;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_TICK_RATE_MS: u64 = 250;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout, also the spinner frame rate
    pub tick_rate_ms: u64,
    /// Keep the search input focused across term changes
    pub keep_focussed: bool,
    /// Render the sidebar on the right-hand side
    pub side_bar_right: bool,
    /// Log level name (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log file path; logging is disabled when unset
    pub log_file: Option<PathBuf>,
    /// JSON message store to search instead of the built-in sample
    pub data_file: Option<PathBuf>,
    /// Localized message overrides keyed by message id
    pub messages: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            keep_focussed: false,
            side_bar_right: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
            data_file: None,
            messages: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        Ok(home_dir
            .join(".config")
            .join("chatsearch")
            .join(CONFIG_FILE_NAME))
    }

    /// Get log level with CHATSEARCH_LOG taking precedence over the file
    pub fn effective_log_level(&self) -> String {
        std::env::var("CHATSEARCH_LOG")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.log_level.clone())
    }
}
