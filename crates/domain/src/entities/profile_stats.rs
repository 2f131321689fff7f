//! Profile statistics

use serde::{Deserialize, Serialize};

/// Roast counters shown on a profile
///
/// Nothing is persisted, so the counters are fixed display values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Roasts this user has received
    pub received_roasts: u32,
    /// Roasts this user has handed out
    pub given_roasts: u32,
}

impl ProfileStats {
    /// The static display values
    pub const fn placeholder() -> Self {
        Self {
            received_roasts: 10,
            given_roasts: 5,
        }
    }
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self::placeholder()
    }
}
