//! Roast generation handler

use application::GenerateRoastInput;
use axum::{Json, extract::State};
use domain::Bio;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    error::ApiError,
    middleware::{ValidatedJson, validation::rule_violation},
    state::AppState,
};

/// Roast request body
#[derive(Debug, Deserialize, Validate)]
pub struct RoastRequest {
    /// Text to be roasted, 10 to 2000 characters after trimming
    #[validate(custom(function = "validate_bio"))]
    pub bio: String,
}

/// Roast response body
#[derive(Debug, Serialize, Deserialize)]
pub struct RoastResponse {
    pub roast: String,
}

fn validate_bio(bio: &str) -> Result<(), validator::ValidationError> {
    Bio::parse(bio)
        .map(|_| ())
        .map_err(|e| rule_violation("bio", bio_message(&e)))
}

/// User-facing text of a bio rejection
fn bio_message(err: &domain::DomainError) -> String {
    match err {
        domain::DomainError::InvalidBio(msg) => msg.clone(),
        other => other.to_string(),
    }
}

/// Generate a roast from a bio
#[instrument(skip(state, request), fields(bio_len = request.bio.len()))]
pub async fn generate_roast(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RoastRequest>,
) -> Result<Json<RoastResponse>, ApiError> {
    let bio = Bio::parse(request.bio)?;

    let output = state
        .roast_service
        .generate_roast(GenerateRoastInput {
            bio: bio.into_inner(),
        })
        .await?;

    info!(roast_len = output.roast.len(), "Roast served");

    Ok(Json(RoastResponse {
        roast: output.roast,
    }))
}
