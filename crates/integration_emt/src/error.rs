//! EMT client error types

use thiserror::Error;

/// Errors that can occur while talking to the EMT openbus service
#[derive(Debug, Error)]
pub enum EmtError {
    /// Endpoint name is not in the endpoint table
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with a non-success HTTP status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The response body is not JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Credential file missing or malformed
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl EmtError {
    /// Returns true if the failure happened on the wire rather than in setup
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ParseError(_)
                | Self::Timeout { .. }
        )
    }
}
