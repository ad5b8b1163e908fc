// --- File: crates/formarte_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all FormArte errors.
///
/// Each crate defines its own error enum and implements
/// `From<CrateError> for PortalError` so handlers can share one response shape.
#[derive(Error, Debug)]
pub enum PortalError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Wrong credentials or unknown account
    #[error("{0}")]
    AuthError(String),

    /// Form validation failed; the message is shown inline to the user
    #[error("{0}")]
    ValidationError(String),

    /// Error occurred while reading or writing durable storage
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Error occurred due to a conflict (e.g., resource already exists)
    #[error("{0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// The requested feature is switched off in configuration
    #[error("Feature disabled: {0}")]
    FeatureDisabled(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for PortalError {
    fn status_code(&self) -> u16 {
        match self {
            PortalError::ParseError(_) => 400,
            PortalError::ConfigError(_) => 500,
            PortalError::AuthError(_) => 401,
            PortalError::ValidationError(_) => 400,
            PortalError::StorageError(_) => 500,
            PortalError::ConflictError(_) => 409,
            PortalError::NotFoundError(_) => 404,
            PortalError::FeatureDisabled(_) => 503,
            PortalError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, PortalError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, PortalError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, PortalError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| PortalError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, PortalError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| PortalError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::StorageError(err.to_string())
    }
}
