//! Speech port - Interface for text-to-speech operations

use async_trait::async_trait;
use domain::VoicePersona;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::error::ApplicationError;

/// Result of a speech synthesis operation
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Raw audio bytes as returned by the provider
    pub audio_data: Vec<u8>,
    /// MIME type of the audio
    pub mime_type: String,
}

/// A persona as offered to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceOption {
    /// Wire value (`"sarcastic guy"`, ...)
    pub value: VoicePersona,
    /// Display label
    pub label: String,
    /// Whether the persona has a usable voice identifier
    pub configured: bool,
}

/// Port for speech processing operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Synthesize text in the given persona's voice
    ///
    /// # Errors
    /// `Configuration` when the key or voice is missing (no request is made),
    /// `Upstream` on a non-success provider status, `Transport` on network failure.
    async fn synthesize(
        &self,
        text: &str,
        persona: VoicePersona,
    ) -> Result<SynthesisResult, ApplicationError>;

    /// Personas and whether each can be used
    fn voices(&self) -> Vec<VoiceOption>;

    /// Whether an API key is configured
    fn is_configured(&self) -> bool;
}
