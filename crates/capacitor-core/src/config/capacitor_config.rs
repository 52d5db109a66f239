//! Top-level capacitor configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ObservabilityConfig, ProducerDefaults};
use crate::constants::VALID_LOG_LEVELS;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacitorConfig {
    pub producer: ProducerDefaults,
    pub observability: ObservabilityConfig,
}

impl CapacitorConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<string>")
    }

    /// Load configuration from a TOML file and validate it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "loading capacitor config");
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: path_str });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&contents, &path_str)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_ascii_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "unknown level '{}', expected one of {}",
                    self.observability.log_level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }

    fn parse(toml_str: &str, path: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}
