use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns `<config_dir>/assembly-designer/config.toml`.
    ///
    /// Falls back to the current directory if the platform has no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("assembly-designer").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. An existing file must
    /// parse as TOML and pass validation.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - the default selection is not blank
    /// - at least one assembly method is offered, none blank
    /// - the tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wizard.default_selection.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "wizard.default_selection must not be empty".to_string(),
            });
        }

        if self.wizard.assembly_methods.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one assembly method must be configured".to_string(),
            });
        }

        if let Some(pos) = self
            .wizard
            .assembly_methods
            .iter()
            .position(|m| m.trim().is_empty())
        {
            return Err(ConfigError::ValidationError {
                message: format!("wizard.assembly_methods[{}] is empty", pos),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
