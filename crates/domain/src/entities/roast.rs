//! Roast entity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A generated roast
///
/// The text is kept exactly as the model produced it. An empty roast is
/// never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roast {
    roast: String,
}

impl Roast {
    /// Wrap generated text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the text is empty or whitespace.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let roast = text.into();
        if roast.trim().is_empty() {
            return Err(DomainError::validation("roast text is empty"));
        }
        Ok(Self { roast })
    }

    /// The roast text, unmodified
    pub fn text(&self) -> &str {
        &self.roast
    }

    /// Consume and return the text
    pub fn into_text(self) -> String {
        self.roast
    }
}

impl fmt::Display for Roast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.roast)
    }
}
