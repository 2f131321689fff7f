//! Configuration for speech synthesis

use std::time::Duration;

use domain::VoicePersona;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Prefix marking a voice identifier that was never filled in
pub const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Configuration for the ElevenLabs speech service
#[derive(Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// ElevenLabs API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Synthesis model
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Voice stability (0.0 - 1.0)
    #[serde(default = "default_stability")]
    pub stability: f32,

    /// Similarity boost (0.0 - 1.0)
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f32,

    /// Request timeout in milliseconds; unset leaves the HTTP client default
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Persona to voice identifier table
    #[serde(default)]
    pub voices: VoiceTable,
}

impl std::fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model_id", &self.model_id)
            .field("stability", &self.stability)
            .field("similarity_boost", &self.similarity_boost)
            .field("timeout_ms", &self.timeout_ms)
            .field("voices", &self.voices)
            .finish()
    }
}

/// Voice identifiers for each persona
///
/// One field per persona, so every persona always has an entry. An entry may
/// still be unusable (empty or a `YOUR_...` placeholder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceTable {
    #[serde(default = "default_sarcastic_guy")]
    pub sarcastic_guy: String,
    #[serde(default = "default_rude_grandma")]
    pub rude_grandma: String,
    #[serde(default = "default_british_villain")]
    pub british_villain: String,
}

impl VoiceTable {
    /// Configured identifier for a persona, usable or not
    pub fn get(&self, persona: VoicePersona) -> &str {
        match persona {
            VoicePersona::SarcasticGuy => &self.sarcastic_guy,
            VoicePersona::RudeGrandma => &self.rude_grandma,
            VoicePersona::BritishVillain => &self.british_villain,
        }
    }

    /// Identifier for a persona if it is usable
    pub fn resolve(&self, persona: VoicePersona) -> Option<&str> {
        let id = self.get(persona).trim();
        (!is_placeholder(id)).then_some(id)
    }

    /// Personas whose identifier is empty or a placeholder
    pub fn unconfigured(&self) -> Vec<VoicePersona> {
        VoicePersona::all()
            .into_iter()
            .filter(|p| self.resolve(*p).is_none())
            .collect()
    }
}

impl Default for VoiceTable {
    fn default() -> Self {
        Self {
            sarcastic_guy: default_sarcastic_guy(),
            rude_grandma: default_rude_grandma(),
            british_villain: default_british_villain(),
        }
    }
}

/// Whether a voice identifier is missing or still a placeholder
pub fn is_placeholder(voice_id: &str) -> bool {
    let id = voice_id.trim();
    id.is_empty() || id.starts_with(PLACEHOLDER_PREFIX)
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_string()
}

const fn default_stability() -> f32 {
    0.5
}

const fn default_similarity_boost() -> f32 {
    0.75
}

fn default_sarcastic_guy() -> String {
    "pNInz6obpgDQGcFmaJgB".to_string()
}

fn default_rude_grandma() -> String {
    "ThT5KcBeYPX3keUQqHPh".to_string()
}

fn default_british_villain() -> String {
    "JBFqnCBsd6RMkjVDRZzb".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model_id: default_model_id(),
            stability: default_stability(),
            similarity_boost: default_similarity_boost(),
            timeout_ms: None,
            voices: VoiceTable::default(),
        }
    }
}

impl SpeechConfig {
    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Explicit request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Whether a non-empty API key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// A missing API key is not an error here; synthesis reports it per call.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.stability) {
            return Err(format!(
                "Stability must be between 0.0 and 1.0, got {}",
                self.stability
            ));
        }

        if !(0.0..=1.0).contains(&self.similarity_boost) {
            return Err(format!(
                "Similarity boost must be between 0.0 and 1.0, got {}",
                self.similarity_boost
            ));
        }

        if self.timeout_ms == Some(0) {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.base_url.trim().is_empty() {
            return Err("Base URL must not be empty".to_string());
        }

        Ok(())
    }
}
