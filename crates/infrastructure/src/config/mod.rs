//! Application configuration
//!
//! Layered from built-in defaults, an optional `config.toml`, and
//! `ROAST__`-prefixed environment variables (`ROAST__SERVER__PORT=8080`,
//! `ROAST__SPEECH__API_KEY=...`). The speech API key additionally falls back
//! to `ELEVENLABS_API_KEY`. Everything is read once at startup.

mod server;

use std::collections::HashMap;
use std::fmt;

use ai_core::InferenceConfig;
use ai_speech::SpeechConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use server::{LogFormat, ServerConfig};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "ROAST";

/// Conventional ElevenLabs key variable, used when no key is configured
pub const ELEVENLABS_API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - relaxed warnings, detailed errors
    #[default]
    Development,
    /// Production environment - internal error details hidden
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Text generation configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Speech synthesis configuration
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut config = Self::build(
            config::File::with_name("config").required(false),
            Self::env_source(None),
        )?;
        config.apply_api_key_fallback(std::env::var(ELEVENLABS_API_KEY_ENV).ok());
        Ok(config)
    }

    /// Load configuration from TOML text and an explicit variable map
    ///
    /// Applies exactly the same layering as [`AppConfig::load`] without
    /// touching the process environment.
    pub fn from_sources(
        toml: &str,
        env: &HashMap<String, String>,
    ) -> Result<Self, config::ConfigError> {
        let mut config = Self::build(
            config::File::from_str(toml, config::FileFormat::Toml),
            Self::env_source(Some(env.clone())),
        )?;
        config.apply_api_key_fallback(env.get(ELEVENLABS_API_KEY_ENV).cloned());
        Ok(config)
    }

    fn env_source(vars: Option<HashMap<String, String>>) -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .source(vars)
    }

    fn build<S>(file: S, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("inference.base_url", "http://localhost:11434")?
            .set_default("speech.base_url", "https://api.elevenlabs.io")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., ROAST__SERVER__PORT)
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Use `ELEVENLABS_API_KEY` when no key came from file or `ROAST__` variables
    fn apply_api_key_fallback(&mut self, fallback: Option<String>) {
        if self.speech.has_api_key() {
            return;
        }
        if let Some(key) = fallback.filter(|k| !k.trim().is_empty()) {
            self.speech.api_key = Some(SecretString::from(key));
        }
    }

    /// Whether internal error details may be returned to clients
    pub const fn expose_internal_errors(&self) -> bool {
        matches!(self.environment, Environment::Development)
    }

    /// Log configuration problems that do not prevent startup
    ///
    /// Returns the warnings so callers and tests can inspect them.
    pub fn validate_startup(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.speech.has_api_key() {
            warnings.push(format!(
                "No ElevenLabs API key configured (set {ENV_PREFIX}__SPEECH__API_KEY or {ELEVENLABS_API_KEY_ENV}); voice roasts will fail"
            ));
        }

        for persona in self.speech.voices.unconfigured() {
            warnings.push(format!(
                "Voice ID for {} is not configured; that persona will fail",
                persona.label()
            ));
        }

        if let Err(e) = self.speech.validate() {
            warnings.push(format!("Invalid speech configuration: {e}"));
        }

        if self.environment == Environment::Production && self.server.allowed_origins.is_empty() {
            warnings.push("CORS allows any origin in production".to_string());
        }

        for warning in &warnings {
            warn!(environment = %self.environment, "{warning}");
        }

        if warnings.is_empty() {
            info!(environment = %self.environment, "Configuration validated");
        }

        warnings
    }
}
