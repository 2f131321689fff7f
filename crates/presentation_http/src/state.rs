//! Application state shared across handlers

use std::sync::Arc;

use application::{RoastService, SocialService, VoiceRoastService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Roast generation from a bio
    pub roast_service: Arc<RoastService>,
    /// Text-to-speech for roasts
    pub voice_roast_service: Arc<VoiceRoastService>,
    /// Reactions, sharing and profile stats
    pub social_service: SocialService,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
