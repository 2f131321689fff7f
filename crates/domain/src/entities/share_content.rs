//! Share payload for the Web Share flow

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Content handed to a platform share sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareContent {
    /// Share title
    pub title: String,
    /// The roast text
    pub text: String,
    /// Link back to the page
    pub url: String,
}

impl ShareContent {
    /// Fixed share title
    pub const TITLE: &'static str = "Check out my roast!";

    /// Build a share payload for a roast
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` when there is no roast to share.
    pub fn new(roast: &str, url: impl Into<String>) -> Result<Self, DomainError> {
        if roast.trim().is_empty() {
            return Err(DomainError::validation(
                "Generate a roast first before sharing.",
            ));
        }

        Ok(Self {
            title: Self::TITLE.to_string(),
            text: roast.to_string(),
            url: url.into(),
        })
    }
}
