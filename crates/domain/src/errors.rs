//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Bio failed validation
    #[error("Invalid bio: {0}")]
    InvalidBio(String),

    /// Voice style outside the supported persona set
    #[error("Unknown voice persona: {0}")]
    UnknownVoicePersona(String),

    /// Reaction outside the supported emoji set
    #[error("Unknown reaction: {0}")]
    UnknownReaction(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a generic validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}
