//! Social service - Reactions, sharing and profile stats
//!
//! Nothing here is stored; every call builds its answer from the input alone.

use domain::{ProfileStats, Reaction, ShareContent};
use serde::Serialize;
use tracing::debug;

use crate::error::ApplicationError;

/// Acknowledgement of a reaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionAck {
    /// The reaction emoji
    pub reaction: String,
    /// Message shown to the user
    pub message: String,
}

/// Stateless social affordances
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialService;

impl SocialService {
    /// Create a new social service
    pub const fn new() -> Self {
        Self
    }

    /// Acknowledge a reaction
    pub fn react(&self, reaction: Reaction) -> ReactionAck {
        debug!(reaction = reaction.name(), "Reaction received");
        ReactionAck {
            reaction: reaction.emoji().to_string(),
            message: reaction.acknowledgement(),
        }
    }

    /// Build a share payload for a roast
    pub fn share(&self, roast: &str, url: &str) -> Result<ShareContent, ApplicationError> {
        Ok(ShareContent::new(roast, url)?)
    }

    /// Profile counters
    pub const fn profile_stats(&self) -> ProfileStats {
        ProfileStats::placeholder()
    }
}
