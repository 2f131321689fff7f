//! Voice roast handlers

use application::VoiceOption;
use axum::{Json, extract::State};
use domain::VoicePersona;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    error::ApiError,
    middleware::{ValidatedJson, validation::rule_violation},
    state::AppState,
};

/// Longest roast text accepted for synthesis
pub const MAX_VOICE_TEXT_CHARS: usize = 5000;

/// Voice roast request body
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VoiceRoastRequest {
    /// Roast text to read aloud
    #[validate(custom(function = "validate_roast_text"))]
    pub text: String,
    /// Persona wire value, e.g. `"rude grandma"`
    pub voice_style: VoicePersona,
}

/// Voice roast response body
#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceRoastResponse {
    /// Base64-encoded MP3
    pub audio: String,
}

fn validate_roast_text(text: &str) -> Result<(), validator::ValidationError> {
    if text.trim().is_empty() {
        return Err(rule_violation(
            "text",
            "Please generate a roast first.".to_string(),
        ));
    }
    if text.chars().count() > MAX_VOICE_TEXT_CHARS {
        return Err(rule_violation(
            "text",
            format!("Roast text must be at most {MAX_VOICE_TEXT_CHARS} characters."),
        ));
    }
    Ok(())
}

/// Read a roast aloud in the chosen persona
#[instrument(skip(state, request), fields(text_len = request.text.len(), persona = %request.voice_style))]
pub async fn generate_voice_roast(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VoiceRoastRequest>,
) -> Result<Json<VoiceRoastResponse>, ApiError> {
    let output = state
        .voice_roast_service
        .make_voice_roast(&request.text, request.voice_style)
        .await?;

    info!(encoded_len = output.audio.len(), "Voice roast served");

    Ok(Json(VoiceRoastResponse {
        audio: output.audio,
    }))
}

/// List the voice personas
pub async fn list_voices(State(state): State<AppState>) -> Json<Vec<VoiceOption>> {
    Json(state.voice_roast_service.voices())
}
