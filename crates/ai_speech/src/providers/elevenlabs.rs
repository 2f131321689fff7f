//! ElevenLabs Speech Provider
//!
//! Implements `TextToSpeech` against the ElevenLabs REST API:
//! `POST {base_url}/v1/text-to-speech/{voice_id}` returning `audio/mpeg` bytes.

use async_trait::async_trait;
use bytes::Bytes;
use domain::VoicePersona;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, AudioFormat, VoiceInfo};

/// Header carrying the ElevenLabs API key
const API_KEY_HEADER: &str = "xi-api-key";

/// ElevenLabs text-to-speech provider
#[derive(Debug, Clone)]
pub struct ElevenLabsSpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl ElevenLabsSpeechProvider {
    /// Create a new ElevenLabs provider
    ///
    /// Succeeds without an API key; every synthesis call then fails with
    /// `SpeechError::Configuration`.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the synthesis endpoint URL for a voice
    fn tts_url(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            voice_id
        )
    }

    fn api_key(&self) -> Result<&str, SpeechError> {
        self.config
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().trim())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                SpeechError::Configuration("ElevenLabs API key is not set".to_string())
            })
    }

    fn send_error(&self, err: reqwest::Error) -> SpeechError {
        if err.is_timeout() {
            SpeechError::Timeout(self.config.timeout_ms.unwrap_or_default())
        } else {
            err.into()
        }
    }
}

/// ElevenLabs synthesis request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[async_trait]
impl TextToSpeech for ElevenLabsSpeechProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), persona = %persona))]
    async fn synthesize(
        &self,
        text: &str,
        persona: VoicePersona,
    ) -> Result<AudioData, SpeechError> {
        let voice_id = self.voice_id(persona)?;
        let api_key = self.api_key()?;

        debug!(voice_id, "Synthesizing speech with ElevenLabs");

        let request = TtsRequest {
            text,
            model_id: &self.config.model_id,
            voice_settings: VoiceSettings {
                stability: self.config.stability,
                similarity_boost: self.config.similarity_boost,
            },
        };

        let response = self
            .client
            .post(self.tts_url(voice_id))
            .header(ACCEPT, "audio/mpeg")
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "ElevenLabs synthesis failed");
            return Err(SpeechError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let format = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(AudioFormat::from_mime_type)
            .unwrap_or_default();

        let bytes: Bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        debug!(size_bytes = bytes.len(), "Speech synthesized");

        Ok(AudioData::new(bytes.to_vec(), format))
    }

    fn voice_id(&self, persona: VoicePersona) -> Result<&str, SpeechError> {
        self.config.voices.resolve(persona).ok_or_else(|| {
            SpeechError::Configuration(format!(
                "Voice ID for {} is not configured",
                persona.label()
            ))
        })
    }

    fn list_personas(&self) -> Vec<VoiceInfo> {
        VoicePersona::all()
            .into_iter()
            .map(|persona| VoiceInfo {
                persona,
                label: persona.label().to_string(),
                voice_id: self.config.voices.resolve(persona).map(str::to_string),
            })
            .collect()
    }

    fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }

    fn model_name(&self) -> &str {
        &self.config.model_id
    }
}
