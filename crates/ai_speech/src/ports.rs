//! Port definitions for speech synthesis
//!
//! Defines the trait (port) that text-to-speech adapters must implement.

use async_trait::async_trait;
use domain::VoicePersona;

use crate::error::SpeechError;
use crate::types::{AudioData, VoiceInfo};

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations of this trait convert text to audio speech in one of the
/// supported voice personas.
///
/// # Example
///
/// ```ignore
/// use ai_speech::TextToSpeech;
/// use domain::VoicePersona;
///
/// async fn read_roast(tts: &impl TextToSpeech, roast: &str) -> Result<Vec<u8>, SpeechError> {
///     let audio = tts.synthesize(roast, VoicePersona::BritishVillain).await?;
///     Ok(audio.into_data())
/// }
/// ```
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` without contacting the provider
    /// when the API key or the persona's voice identifier is missing.
    async fn synthesize(&self, text: &str, persona: VoicePersona)
    -> Result<AudioData, SpeechError>;

    /// Resolve the voice identifier used for a persona
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` for an empty or placeholder identifier.
    fn voice_id(&self, persona: VoicePersona) -> Result<&str, SpeechError>;

    /// All personas with their resolved voices
    fn list_personas(&self) -> Vec<VoiceInfo>;

    /// Whether an API key is available
    fn is_configured(&self) -> bool;

    /// Get the name of the synthesis model
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AudioFormat;

    /// Mock implementation for testing
    struct MockTextToSpeech {
        voice: String,
    }

    #[async_trait]
    impl TextToSpeech for MockTextToSpeech {
        async fn synthesize(
            &self,
            _text: &str,
            _persona: VoicePersona,
        ) -> Result<AudioData, SpeechError> {
            Ok(AudioData::new(vec![0, 1, 2, 3], AudioFormat::Mp3))
        }

        fn voice_id(&self, _persona: VoicePersona) -> Result<&str, SpeechError> {
            Ok(&self.voice)
        }

        fn list_personas(&self) -> Vec<VoiceInfo> {
            VoicePersona::all()
                .into_iter()
                .map(|persona| VoiceInfo {
                    persona,
                    label: persona.label().to_string(),
                    voice_id: Some(self.voice.clone()),
                })
                .collect()
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "mock-tts"
        }
    }

    #[tokio::test]
    async fn mock_tts_synthesizes() {
        let tts = MockTextToSpeech {
            voice: "voice-1".to_string(),
        };

        let audio = tts
            .synthesize("Hello", VoicePersona::SarcasticGuy)
            .await
            .unwrap();
        assert_eq!(audio.size_bytes(), 4);
    }

    #[test]
    fn trait_is_object_safe() {
        let tts: Box<dyn TextToSpeech> = Box::new(MockTextToSpeech {
            voice: "voice-1".to_string(),
        });
        assert_eq!(tts.list_personas().len(), 3);
        assert_eq!(tts.voice_id(VoicePersona::RudeGrandma).unwrap(), "voice-1");
    }
}
