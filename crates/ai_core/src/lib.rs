//! AI Core - Inference engine abstractions
//!
//! Provides the [`InferenceEngine`] port and a client for any Ollama-compatible
//! server. Requests may carry a JSON schema that constrains the model output.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ollama::OllamaInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};
