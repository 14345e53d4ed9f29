//! Configuration management for the fleet registry.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is not set
    pub level: String,
    /// Emit structured JSON instead of plain formatted output
    pub json: bool,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Built-in defaults: plain formatted output at `info` level.
    pub fn default_config() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                json: false,
            },
        }
    }
}
