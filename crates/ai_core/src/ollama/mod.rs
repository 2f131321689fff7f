//! Ollama-compatible inference engine implementation
//!
//! Connects to any Ollama-compatible server through its `/api/chat` endpoint.

mod client;

pub use client::OllamaInferenceEngine;
