//! Error types for sigwarden

use thiserror::Error;

/// Main error type for sigwarden operations
#[derive(Error, Debug)]
pub enum SigwardenError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Duplicate chain id in allow-list: {0}")]
    DuplicateChainId(u64),

    // Storage errors
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<std::io::Error> for SigwardenError {
    fn from(err: std::io::Error) -> Self {
        SigwardenError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for SigwardenError {
    fn from(err: serde_json::Error) -> Self {
        SigwardenError::StorageError(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SigwardenError>;
