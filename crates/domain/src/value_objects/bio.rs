//! Bio value object with validation
//!
//! The text a user submits to be roasted. Length rules are enforced by callers
//! (the HTTP layer and the CLI) before a roast is requested; the roast service
//! itself accepts any text.
//!
//! # Examples
//!
//! ```
//! use domain::Bio;
//!
//! let bio = Bio::parse("I collect vintage rubber ducks.").unwrap();
//! assert_eq!(bio.as_str(), "I collect vintage rubber ducks.");
//!
//! // Too short to roast
//! assert!(Bio::parse("hi").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated user biography
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct Bio {
    #[validate(length(min = 10, max = 2000))]
    value: String,
}

impl Bio {
    /// Minimum number of characters a bio must contain
    pub const MIN_CHARS: usize = 10;

    /// Maximum number of characters accepted
    pub const MAX_CHARS: usize = 2000;

    /// Parse a bio, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBio` if the bio is empty or its length is
    /// outside `MIN_CHARS..=MAX_CHARS`.
    pub fn parse(bio: impl Into<String>) -> Result<Self, DomainError> {
        let value = bio.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::InvalidBio(
                "Please enter a bio to generate a roast.".to_string(),
            ));
        }

        let candidate = Self { value };
        candidate.validate().map_err(|_| {
            DomainError::InvalidBio(format!(
                "Bio must be between {} and {} characters.",
                Self::MIN_CHARS,
                Self::MAX_CHARS
            ))
        })?;

        Ok(candidate)
    }

    /// Get the bio as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the bio and return the inner text
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Display for Bio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Bio {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Bio {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
