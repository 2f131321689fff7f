//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod ollama_inference_adapter;
mod speech_adapter;

pub use ollama_inference_adapter::OllamaInferenceAdapter;
pub use speech_adapter::SpeechAdapter;
