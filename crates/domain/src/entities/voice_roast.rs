//! Voice roast entity

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::value_objects::VoicePersona;

/// Synthesized speech for a roast
///
/// Holds the raw bytes returned by the speech provider. Encoding never
/// alters them: decoding [`VoiceRoast::to_base64`] yields the same bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct VoiceRoast {
    audio: Vec<u8>,
    persona: VoicePersona,
}

impl VoiceRoast {
    /// MIME type of provider audio
    pub const MIME_TYPE: &'static str = "audio/mpeg";

    /// Create from raw audio bytes
    pub fn new(audio: Vec<u8>, persona: VoicePersona) -> Self {
        Self { audio, persona }
    }

    /// Raw audio bytes
    pub fn audio(&self) -> &[u8] {
        &self.audio
    }

    /// Persona the audio was spoken in
    pub const fn persona(&self) -> VoicePersona {
        self.persona
    }

    /// Number of audio bytes
    pub fn len(&self) -> usize {
        self.audio.len()
    }

    /// Whether the provider returned no audio
    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }

    /// Standard-alphabet, padded base64 of the audio
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.audio)
    }

    /// Playable data URI (`data:audio/mpeg;base64,...`)
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", Self::MIME_TYPE, self.to_base64())
    }
}

impl std::fmt::Debug for VoiceRoast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceRoast")
            .field("audio_bytes", &self.audio.len())
            .field("persona", &self.persona)
            .finish()
    }
}
