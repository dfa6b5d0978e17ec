use std::path::PathBuf;

use thiserror::Error;

/// Extraction itself never fails; only loading and validating configuration can.
#[derive(Error, Debug)]
pub enum TitleExtractorError {
    #[error("Failed to read config file {path}: {message}")]
    ConfigIo { path: PathBuf, message: String },

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
