//! Application configuration (environment-driven).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_observability::{LogFormat, ParseLogFormatError};

pub const SEED_SAMPLE_DATA_VAR: &str = "STOCKROOM_SEED_SAMPLE_DATA";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean, got {value:?}")]
    InvalidBool { key: &'static str, value: String },

    #[error("STOCKROOM_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] ParseLogFormatError),
}

/// Runtime settings for the desktop application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Preload the demo parts and products at startup.
    pub seed_sample_data: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    /// Read settings from the process environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup` (environment-shaped key/value access).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_SAMPLE_DATA_VAR) {
            config.seed_sample_data = parse_bool(SEED_SAMPLE_DATA_VAR, &raw)?;
        }
        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw.parse()?;
        }

        Ok(config)
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: raw.to_string(),
        }),
    }
}
