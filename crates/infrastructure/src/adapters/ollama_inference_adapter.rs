//! Ollama inference adapter - Implements InferencePort using ai_core
//!
//! Works with any Ollama-compatible backend. Every request carries the JSON
//! schema so the server constrains the model output.

use std::time::Instant;

use ai_core::{InferenceConfig, InferenceEngine, InferenceError, InferenceRequest, OllamaInferenceEngine};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Adapter for Ollama-compatible inference servers
#[derive(Debug)]
pub struct OllamaInferenceAdapter {
    engine: OllamaInferenceEngine,
}

impl OllamaInferenceAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine = OllamaInferenceEngine::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { engine })
    }

    /// Create with default configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the HTTP client cannot be built.
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(InferenceConfig::default())
    }

    /// Convert ai_core error to application error
    fn map_error(e: InferenceError) -> ApplicationError {
        match e {
            InferenceError::ServerError { status, body } => ApplicationError::Upstream {
                status,
                message: body,
            },
            InferenceError::ConnectionFailed(msg) => {
                ApplicationError::Transport(format!("Inference server unreachable: {msg}"))
            },
            InferenceError::Timeout(ms) => {
                ApplicationError::Transport(format!("Inference timeout after {ms}ms"))
            },
            InferenceError::RequestFailed(msg) => ApplicationError::Transport(msg),
            InferenceError::InvalidResponse(msg) => {
                ApplicationError::Generation(format!("Unreadable inference response: {msg}"))
            },
        }
    }
}

#[async_trait]
impl InferencePort for OllamaInferenceAdapter {
    #[instrument(skip(self, prompt, schema), fields(prompt_len = prompt.len()))]
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let request = InferenceRequest::simple(prompt).with_format(schema.clone());

        let response = self.engine.generate(request).await.map_err(|e| {
            warn!(error = %e, "Structured generation failed");
            Self::map_error(e)
        })?;

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            latency_ms = latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }

    fn current_model(&self) -> String {
        self.engine.default_model().to_string()
    }
}
