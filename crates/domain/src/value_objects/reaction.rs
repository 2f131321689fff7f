//! Emoji reaction value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Emoji reaction to a roast
///
/// Accepted from callers either as the emoji itself or as its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    /// 😂
    Laughing,
    /// 🤬
    Angry,
    /// 🔥
    Fire,
    /// 🗑️
    Trash,
}

impl Reaction {
    /// Emoji representation
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Laughing => "😂",
            Self::Angry => "🤬",
            Self::Fire => "🔥",
            Self::Trash => "🗑️",
        }
    }

    /// Name used on the wire
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Laughing => "laughing",
            Self::Angry => "angry",
            Self::Fire => "fire",
            Self::Trash => "trash",
        }
    }

    /// Acknowledgement shown to the user after reacting
    pub fn acknowledgement(&self) -> String {
        format!("You reacted with {}!", self.emoji())
    }

    /// All reactions in display order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Laughing, Self::Angry, Self::Fire, Self::Trash]
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

impl FromStr for Reaction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The trash emoji is sometimes sent without the variation selector
        let trimmed = s.trim();
        Self::all()
            .into_iter()
            .find(|r| {
                r.name() == trimmed
                    || r.emoji() == trimmed
                    || r.emoji().trim_end_matches('\u{fe0f}') == trimmed
            })
            .ok_or_else(|| DomainError::UnknownReaction(s.to_string()))
    }
}
