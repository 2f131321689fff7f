//! Route definitions

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::{handlers, middleware::request_id, state::AppState};

/// Create the main router with all routes
///
/// Request-ID handling and the body size limit are attached here so every
/// route, including error responses, carries them.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_size_json_bytes;

    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Roast API (v1)
        .route("/v1/roasts", post(handlers::roast::generate_roast))
        .route("/v1/roasts/voice", post(handlers::voice::generate_voice_roast))
        .route("/v1/voices", get(handlers::voice::list_voices))
        // Social API (v1)
        .route("/v1/reactions", post(handlers::social::react))
        .route("/v1/share", post(handlers::social::share))
        .route("/v1/profile/stats", get(handlers::social::profile_stats))
        // Attach state
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::from_fn(request_id))
}
