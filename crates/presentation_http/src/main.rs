//! Roast Central HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{InferencePort, RoastService, SocialService, SpeechPort, VoiceRoastService};
use infrastructure::{AppConfig, OllamaInferenceAdapter, SpeechAdapter, init_logging};
use presentation_http::{error::set_expose_internal_errors, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize tracing
    init_logging(
        config.server.log_format,
        "roast_central_server=debug,presentation_http=debug,tower_http=debug",
    )?;

    if let Some(e) = load_error {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }

    info!("🔥 Roast Central v{} starting...", env!("CARGO_PKG_VERSION"));

    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = %config.server.port,
        model = %config.inference.default_model,
        speech_configured = config.speech.has_api_key(),
        "Configuration loaded"
    );

    config.validate_startup();
    set_expose_internal_errors(config.expose_internal_errors());

    // Initialize adapters
    let inference: Arc<dyn InferencePort> = Arc::new(
        OllamaInferenceAdapter::new(config.inference.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize inference: {e}"))?,
    );
    let speech: Arc<dyn SpeechPort> = Arc::new(
        SpeechAdapter::new(config.speech.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize speech: {e}"))?,
    );

    let config = Arc::new(config);
    let state = AppState {
        roast_service: Arc::new(RoastService::new(inference)),
        voice_roast_service: Arc::new(VoiceRoastService::new(speech)),
        social_service: SocialService::new(),
        config: Arc::clone(&config),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let app = if config.server.cors_enabled {
        let cors_layer = if config.server.allowed_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use axum::http::{HeaderValue, Method};
            let origins: Vec<HeaderValue> = config
                .server
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any)
        };
        app.layer(cors_layer)
    } else {
        app
    };

    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
