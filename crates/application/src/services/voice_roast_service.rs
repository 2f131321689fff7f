//! Voice roast service - Reads a roast aloud and encodes the audio

use std::{fmt, sync::Arc, time::Instant};

use domain::{VoicePersona, VoiceRoast};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{SpeechPort, VoiceOption},
};

/// Transport-friendly voice roast result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceRoastOutput {
    /// Base64 (standard alphabet, padded) audio bytes
    pub audio: String,
}

/// Service that turns roast text into encoded speech
pub struct VoiceRoastService {
    speech: Arc<dyn SpeechPort>,
}

impl fmt::Debug for VoiceRoastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceRoastService")
            .field("configured", &self.speech.is_configured())
            .finish_non_exhaustive()
    }
}

impl VoiceRoastService {
    /// Create a new voice roast service
    pub fn new(speech: Arc<dyn SpeechPort>) -> Self {
        Self { speech }
    }

    /// Synthesize a roast into raw audio
    ///
    /// Errors from the speech port propagate unchanged.
    #[instrument(skip(self, text), fields(text_len = text.len(), persona = %persona))]
    pub async fn synthesize(
        &self,
        text: &str,
        persona: VoicePersona,
    ) -> Result<VoiceRoast, ApplicationError> {
        let start = Instant::now();

        let result = self.speech.synthesize(text, persona).await?;

        debug!(
            size_bytes = result.audio_data.len(),
            mime_type = %result.mime_type,
            latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Voice roast synthesized"
        );

        Ok(VoiceRoast::new(result.audio_data, persona))
    }

    /// Synthesize a roast and return it base64-encoded
    pub async fn make_voice_roast(
        &self,
        text: &str,
        persona: VoicePersona,
    ) -> Result<VoiceRoastOutput, ApplicationError> {
        let voice = self.synthesize(text, persona).await?;
        Ok(VoiceRoastOutput {
            audio: voice.to_base64(),
        })
    }

    /// Personas offered to callers
    pub fn voices(&self) -> Vec<VoiceOption> {
        self.speech.voices()
    }

    /// Whether an API key is configured
    pub fn is_configured(&self) -> bool {
        self.speech.is_configured()
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    use super::*;
    use crate::ports::{MockSpeechPort, SynthesisResult};

    fn synthesis(bytes: Vec<u8>) -> SynthesisResult {
        SynthesisResult {
            audio_data: bytes,
            mime_type: "audio/mpeg".to_string(),
        }
    }

    #[tokio::test]
    async fn encodes_audio_as_base64() {
        let mut mock = MockSpeechPort::new();
        mock.expect_synthesize()
            .withf(|text, persona| {
                text == "Nice duck collection." && *persona == VoicePersona::RudeGrandma
            })
            .times(1)
            .returning(|_, _| Ok(synthesis(vec![0xFF, 0xFB, 0x90, 0x00])));

        let service = VoiceRoastService::new(Arc::new(mock));
        let output = service
            .make_voice_roast("Nice duck collection.", VoicePersona::RudeGrandma)
            .await
            .unwrap();

        assert_eq!(output.audio, "//uQAA==");
        assert_eq!(STANDARD.decode(&output.audio).unwrap(), vec![0xFF, 0xFB, 0x90, 0x00]);
    }

    #[tokio::test]
    async fn configuration_error_propagates() {
        let mut mock = MockSpeechPort::new();
        mock.expect_synthesize().returning(|_, _| {
            Err(ApplicationError::Configuration(
                "ElevenLabs API key is not set".to_string(),
            ))
        });

        let service = VoiceRoastService::new(Arc::new(mock));
        let err = service
            .make_voice_roast("hello", VoicePersona::SarcasticGuy)
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[tokio::test]
    async fn upstream_error_propagates() {
        let mut mock = MockSpeechPort::new();
        mock.expect_synthesize().returning(|_, _| {
            Err(ApplicationError::Upstream {
                status: 401,
                message: "bad key".to_string(),
            })
        });

        let service = VoiceRoastService::new(Arc::new(mock));
        let err = service
            .make_voice_roast("hello", VoicePersona::BritishVillain)
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Upstream { status: 401, .. }));
    }

    #[tokio::test]
    async fn synthesize_keeps_persona() {
        let mut mock = MockSpeechPort::new();
        mock.expect_synthesize()
            .returning(|_, _| Ok(synthesis(b"ID3".to_vec())));

        let service = VoiceRoastService::new(Arc::new(mock));
        let voice = service
            .synthesize("hello", VoicePersona::BritishVillain)
            .await
            .unwrap();

        assert_eq!(voice.persona(), VoicePersona::BritishVillain);
        assert_eq!(voice.data_uri(), "data:audio/mpeg;base64,SUQz");
    }

    #[test]
    fn voices_delegate_to_port() {
        let mut mock = MockSpeechPort::new();
        mock.expect_voices().returning(|| {
            VoicePersona::all()
                .into_iter()
                .map(|p| VoiceOption {
                    value: p,
                    label: p.label().to_string(),
                    configured: true,
                })
                .collect()
        });
        mock.expect_is_configured().returning(|| false);

        let service = VoiceRoastService::new(Arc::new(mock));
        assert_eq!(service.voices().len(), 3);
        assert!(!service.is_configured());
    }
}
