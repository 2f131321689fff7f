//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the Ollama and ElevenLabs adapters, configuration loading, and
//! logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, Environment, LogFormat, ServerConfig};
pub use telemetry::{TelemetryError, init_logging};
