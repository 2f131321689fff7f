//! API error handling
//!
//! Maps application failures onto status codes and a uniform JSON body.
//! Provider response bodies are logged, never returned. In production mode,
//! internal and transport details are replaced with generic messages.

use std::sync::atomic::{AtomicBool, Ordering};

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Global flag to control error detail exposure
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
///
/// Set to `false` in production.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

/// Check if internal error details should be exposed
fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// Return `msg` in development, `fallback` in production
fn redact(msg: &str, fallback: &str) -> String {
    if should_expose_details() {
        msg.to_string()
    } else {
        fallback.to_string()
    }
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input rejected before any provider call
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server is missing an API key or voice mapping
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A provider answered with a non-success status
    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Model output could not be turned into a roast
    #[error("Generation failed: {0}")]
    Generation(String),

    /// A provider could not be reached
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Body for rejected input
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "validation_error".to_string(),
            details: None,
        }
    }
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { .. } | Self::Generation(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Machine-readable error code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "validation_error",
            Self::Configuration(_) => "configuration_error",
            Self::Upstream { .. } => "upstream_error",
            Self::Generation(_) => "generation_error",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match self {
            Self::BadRequest(msg) => (msg, None),
            // Names the missing key or voice, never its value
            Self::Configuration(msg) => (msg, None),
            Self::Upstream { status, message } => {
                warn!(provider_status = status, body = %message, "Upstream provider rejected request");
                (
                    "The upstream provider rejected the request".to_string(),
                    Some(format!("provider status {status}")),
                )
            },
            Self::Generation(msg) => (
                "The model did not return a usable roast".to_string(),
                should_expose_details().then_some(msg),
            ),
            Self::ServiceUnavailable(msg) => {
                (redact(&msg, "Service temporarily unavailable"), None)
            },
            Self::Internal(msg) => (
                "An internal error occurred".to_string(),
                should_expose_details().then_some(msg),
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => e.into(),
            ApplicationError::Configuration(msg) => Self::Configuration(msg),
            ApplicationError::Upstream { status, message } => Self::Upstream { status, message },
            ApplicationError::Transport(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::Generation(msg) => Self::Generation(msg),
            ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
