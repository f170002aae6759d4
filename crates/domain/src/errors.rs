//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Message tag does not name a supported query
    #[error("Unknown query tag: {0}")]
    UnknownQueryTag(String),

    /// Endpoint name is not in the endpoint table
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// A required query field was not supplied
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Date parsing error
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl DomainError {
    /// Create a missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }
}
