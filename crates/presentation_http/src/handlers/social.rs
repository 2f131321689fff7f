//! Reactions, sharing and profile stats

use application::ReactionAck;
use axum::{Json, extract::State};
use domain::{ProfileStats, Reaction, ShareContent};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::{
    error::ApiError,
    middleware::{ValidatedJson, validation::rule_violation},
    state::AppState,
};

/// Reaction request body
#[derive(Debug, Deserialize, Validate)]
pub struct ReactionRequest {
    /// Reaction name (`"fire"`) or emoji (`"🔥"`)
    #[validate(custom(function = "validate_reaction"))]
    pub reaction: String,
}

fn validate_reaction(reaction: &str) -> Result<(), validator::ValidationError> {
    reaction
        .trim()
        .parse::<Reaction>()
        .map(|_| ())
        .map_err(|e| rule_violation("reaction", e.to_string()))
}

/// Share request body
///
/// An empty `text` is rejected by the share service itself.
#[derive(Debug, Deserialize, Validate)]
pub struct ShareRequest {
    /// Roast text to share
    #[serde(default)]
    pub text: String,
    /// Link to include; defaults to the configured public URL
    #[serde(default)]
    pub url: Option<String>,
}

/// Acknowledge a reaction to a roast
#[instrument(skip(state))]
pub async fn react(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> Result<Json<ReactionAck>, ApiError> {
    let reaction: Reaction = request.reaction.trim().parse()?;
    Ok(Json(state.social_service.react(reaction)))
}

/// Build the share payload for a roast
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn share(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ShareRequest>,
) -> Result<Json<ShareContent>, ApiError> {
    let url = request
        .url
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| state.config.server.public_url.clone());

    let content = state.social_service.share(&request.text, &url)?;
    Ok(Json(content))
}

/// Profile counters
pub async fn profile_stats(State(state): State<AppState>) -> Json<ProfileStats> {
    Json(state.social_service.profile_stats())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_request_url_is_optional() {
        let request: ShareRequest = serde_json::from_str(r#"{"text":"Nice ducks."}"#).unwrap();
        assert_eq!(request.text, "Nice ducks.");
        assert!(request.url.is_none());
    }

    #[test]
    fn reaction_rule_rejects_unknown_reaction() {
        assert!(validate_reaction("fire").is_ok());
        assert!(validate_reaction(" 🗑️ ").is_ok());

        let err = validate_reaction("👍").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("Unknown reaction: 👍"));
    }

    #[test]
    fn reaction_request_accepts_emoji() {
        let request: ReactionRequest = serde_json::from_str(r#"{"reaction":"🔥"}"#).unwrap();
        assert_eq!(request.reaction.parse::<Reaction>().unwrap(), Reaction::Fire);
    }
}
