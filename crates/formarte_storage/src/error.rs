//! Error types for the storage backends

use formarte_common::{HttpStatusCode, PortalError};
use thiserror::Error;

/// Errors that can occur when reading or writing the key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing the store before writing it back
    #[error("Storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Error with the storage configuration
    #[error("Storage configuration error: {0}")]
    ConfigError(String),
}

impl From<StorageError> for PortalError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConfigError(msg) => PortalError::ConfigError(msg),
            other => PortalError::StorageError(other.to_string()),
        }
    }
}

impl HttpStatusCode for StorageError {
    fn status_code(&self) -> u16 {
        500
    }
}
