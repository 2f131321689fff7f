//! AI Speech - Text-to-Speech abstractions
//!
//! Provides the [`TextToSpeech`] port and an ElevenLabs implementation that
//! reads roasts aloud in one of the supported voice personas.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{ElevenLabsSpeechProvider, SpeechConfig, TextToSpeech};
//! use domain::VoicePersona;
//!
//! let provider = ElevenLabsSpeechProvider::new(config)?;
//! let audio = provider.synthesize("Nice duck collection.", VoicePersona::RudeGrandma).await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::{SpeechConfig, VoiceTable};
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::elevenlabs::ElevenLabsSpeechProvider;
pub use types::{AudioData, AudioFormat, VoiceInfo};
