//! Speech adapter - Implements SpeechPort using ai_speech crate

use std::sync::Arc;

use ai_speech::{ElevenLabsSpeechProvider, SpeechConfig, SpeechError, TextToSpeech};
use application::error::ApplicationError;
use application::ports::{SpeechPort, SynthesisResult, VoiceOption};
use async_trait::async_trait;
use domain::VoicePersona;
use tracing::{debug, instrument, warn};

/// Adapter for text-to-speech using the ai_speech crate
pub struct SpeechAdapter {
    provider: Arc<dyn TextToSpeech>,
}

impl std::fmt::Debug for SpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAdapter")
            .field("model", &self.provider.model_name())
            .field("configured", &self.provider.is_configured())
            .finish()
    }
}

impl SpeechAdapter {
    /// Create a speech adapter backed by ElevenLabs
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = ElevenLabsSpeechProvider::new(config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self::with_provider(Arc::new(provider)))
    }

    /// Create a speech adapter around any provider
    #[must_use]
    pub fn with_provider(provider: Arc<dyn TextToSpeech>) -> Self {
        Self { provider }
    }

    /// Map speech error to application error
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::Upstream { status, body } => ApplicationError::Upstream {
                status,
                message: body,
            },
            SpeechError::ConnectionFailed(e) | SpeechError::RequestFailed(e) => {
                ApplicationError::Transport(e)
            },
            SpeechError::Timeout(ms) => {
                ApplicationError::Transport(format!("Speech service timeout after {ms}ms"))
            },
            SpeechError::InvalidResponse(e) => {
                ApplicationError::Transport(format!("Invalid speech response: {e}"))
            },
        }
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len(), persona = %persona))]
    async fn synthesize(
        &self,
        text: &str,
        persona: VoicePersona,
    ) -> Result<SynthesisResult, ApplicationError> {
        let audio = self.provider.synthesize(text, persona).await.map_err(|e| {
            warn!(error = %e, "Speech synthesis failed");
            Self::map_error(e)
        })?;

        debug!(size_bytes = audio.size_bytes(), format = ?audio.format(), "Synthesis completed");

        let mime_type = audio.mime_type().to_string();
        Ok(SynthesisResult {
            audio_data: audio.into_data(),
            mime_type,
        })
    }

    fn voices(&self) -> Vec<VoiceOption> {
        self.provider
            .list_personas()
            .into_iter()
            .map(|info| VoiceOption {
                configured: info.is_configured(),
                value: info.persona,
                label: info.label,
            })
            .collect()
    }

    fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }
}
