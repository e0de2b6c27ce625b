//! Configuration loading from eventlog.toml.

use serde::Deserialize;
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Storage backend configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log file naming configuration.
    #[serde(default)]
    pub file: FileConfig,
}

/// Storage backend configuration.
#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// Directory log files are written under.
    #[serde(default = "default_root")]
    pub root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

/// Log file naming configuration.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Prefix of every log file name.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Extension of every log file name.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            extension: default_extension(),
        }
    }
}

fn default_root() -> String {
    "system_event_logs".to_string()
}

fn default_prefix() -> String {
    "log_event_".to_string()
}

fn default_extension() -> String {
    ".json".to_string()
}

impl Config {
    /// Load configuration from a TOML file, or defaults if it is absent.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
