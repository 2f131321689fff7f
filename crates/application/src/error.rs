//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (validation)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Missing API key or unusable voice mapping
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// External provider answered with a non-success status
    #[error("Upstream error (status {status}): {message}")]
    Upstream {
        /// Provider HTTP status
        status: u16,
        /// Provider response body
        message: String,
    },

    /// Network failure before a response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// Model output missing, malformed, or empty
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the caller supplied bad input
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
