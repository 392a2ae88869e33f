use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level failures of the designer binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Failed to open log file '{path}': {source}")]
    Logging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
