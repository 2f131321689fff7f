//! Voice persona value object
//!
//! The closed set of voice styles a roast can be read in. The wire values are
//! the exact strings callers send (`"sarcastic guy"`, `"rude grandma"`,
//! `"British villain"`); anything else is rejected while parsing, before a
//! voice identifier is ever looked up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Voice style used to narrate a roast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VoicePersona {
    /// Dry, deadpan male voice
    #[default]
    #[serde(rename = "sarcastic guy")]
    SarcasticGuy,
    /// Cranky elderly female voice
    #[serde(rename = "rude grandma")]
    RudeGrandma,
    /// Theatrical British baddie
    #[serde(rename = "British villain")]
    BritishVillain,
}

impl VoicePersona {
    /// Wire value used in requests and responses
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SarcasticGuy => "sarcastic guy",
            Self::RudeGrandma => "rude grandma",
            Self::BritishVillain => "British villain",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SarcasticGuy => "Sarcastic Guy",
            Self::RudeGrandma => "Rude Grandma",
            Self::BritishVillain => "British Villain",
        }
    }

    /// All personas in display order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::SarcasticGuy, Self::RudeGrandma, Self::BritishVillain]
    }
}

impl fmt::Display for VoicePersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoicePersona {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|persona| persona.as_str() == s)
            .ok_or_else(|| DomainError::UnknownVoicePersona(s.to_string()))
    }
}
