//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub inference: ServiceStatus,
    pub speech: SpeechStatus,
}

/// Status of the text generation backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub healthy: bool,
    pub model: Option<String>,
}

/// Status of the speech provider
///
/// Only reports whether a key is present; the provider is not contacted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechStatus {
    pub configured: bool,
}

/// Readiness check - is the server ready to accept requests?
///
/// Readiness follows the inference backend only; a missing speech key
/// still lets text roasts work.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let inference_healthy = state.roast_service.is_healthy().await;
    let model = inference_healthy.then(|| state.roast_service.current_model());

    let status_code = if inference_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready: inference_healthy,
            inference: ServiceStatus {
                healthy: inference_healthy,
                model,
            },
            speech: SpeechStatus {
                configured: state.voice_roast_service.is_configured(),
            },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_returns_ok() {
        let response = health_check().await;
        assert_eq!(response.status, "ok");
        assert!(!response.version.is_empty());
    }

    #[test]
    fn readiness_response_serialization() {
        let resp = ReadinessResponse {
            ready: true,
            inference: ServiceStatus {
                healthy: true,
                model: Some("llama3.2".to_string()),
            },
            speech: SpeechStatus { configured: false },
        };
        let json: serde_json::Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["inference"]["model"], "llama3.2");
        assert_eq!(json["speech"]["configured"], false);
    }

    #[test]
    fn readiness_response_deserialization() {
        let json = r#"{"ready":false,"inference":{"healthy":false,"model":null},"speech":{"configured":true}}"#;
        let resp: ReadinessResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.ready);
        assert!(resp.inference.model.is_none());
        assert!(resp.speech.configured);
    }
}
