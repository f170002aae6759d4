//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (invalid query fields)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error (transport failures talking to the transit API)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// User profile lookup failed
    #[error("Profile store error: {0}")]
    ProfileStore(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if the error was caused by the caller's input
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
