//! Error types for configuration loading

use thiserror::Error;

/// Errors that can occur while loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid JSON or does not match the schema
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The JSON root is an array or scalar
    #[error("Configuration root must be a JSON object")]
    NotAnObject,
}
