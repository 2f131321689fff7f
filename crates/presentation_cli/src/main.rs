//! Roast Central CLI
//!
//! Command-line client for a running Roast Central server.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::{Parser, Subcommand};
use domain::{Bio, VoicePersona};
use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Roast Central CLI
#[derive(Parser)]
#[command(name = "roast-central")]
#[command(author, version, about = "Roast Central command-line client", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Server URL
    #[arg(short, long, global = true, env = "ROAST_CENTRAL_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server readiness
    Status,

    /// Generate a roast from a bio
    ///
    /// Example: roast-central roast "I collect vintage rubber ducks and talk to them daily."
    Roast {
        /// Bio to roast (10 to 2000 characters)
        bio: String,
    },

    /// Read a roast aloud and save the MP3
    ///
    /// Example: roast-central voice "Nice duck collection." --style "rude grandma"
    Voice {
        /// Roast text
        text: String,

        /// Voice persona: "sarcastic guy", "rude grandma" or "British villain"
        #[arg(short, long, default_value = "sarcastic guy", value_parser = parse_persona)]
        style: VoicePersona,

        /// Output file
        #[arg(short, long, default_value = "roast.mp3")]
        output: PathBuf,
    },

    /// List voice personas
    Personas,

    /// Exit 0 when the server is ready, 1 otherwise (for container healthchecks)
    Health,
}

/// Error body returned by the server
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
    #[serde(default)]
    details: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RoastBody {
    roast: String,
}

#[derive(Debug, Deserialize)]
struct AudioBody {
    audio: String,
}

#[derive(Debug, Deserialize)]
struct VoiceEntry {
    value: String,
    label: String,
    #[serde(default = "default_configured")]
    configured: bool,
}

const fn default_configured() -> bool {
    true
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format endpoint URL
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn parse_persona(s: &str) -> Result<VoicePersona, String> {
    s.parse::<VoicePersona>().map_err(|e| {
        let valid: Vec<&str> = VoicePersona::all().iter().map(VoicePersona::as_str).collect();
        format!("{e} (expected one of: {})", valid.join(", "))
    })
}

/// Turn a non-success response into an error carrying the server's message
async fn check(response: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => match body.details {
            Some(details) => bail!("{} [{}] ({details})", body.error, body.code),
            None => bail!("{} [{}]", body.error, body.code),
        },
        Err(_) => bail!("HTTP {status}: {text}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = reqwest::Client::new();
    let url = cli.url;

    match cli.command {
        Commands::Status => {
            let resp = client
                .get(endpoint_url(&url, "/ready"))
                .send()
                .await?
                .json::<serde_json::Value>()
                .await?;

            println!("📊 Server Status:");
            println!("{}", serde_json::to_string_pretty(&resp)?);
        },

        Commands::Roast { bio } => {
            let bio = Bio::parse(bio)?;
            debug!(bio_len = bio.as_str().len(), "Requesting roast");

            let resp = client
                .post(endpoint_url(&url, "/v1/roasts"))
                .json(&serde_json::json!({ "bio": bio.as_str() }))
                .send()
                .await?;
            let body: RoastBody = check(resp).await?.json().await?;

            println!("🔥 {}", body.roast);
        },

        Commands::Voice {
            text,
            style,
            output,
        } => {
            if text.trim().is_empty() {
                bail!("Please generate a roast first.");
            }

            println!("🎙️  Reading as {}...", style.label());

            let resp = client
                .post(endpoint_url(&url, "/v1/roasts/voice"))
                .json(&serde_json::json!({ "text": text, "voiceStyle": style }))
                .send()
                .await?;
            let body: AudioBody = check(resp).await?.json().await?;

            let audio = STANDARD
                .decode(body.audio.as_bytes())
                .context("Server returned invalid base64 audio")?;
            tokio::fs::write(&output, &audio)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!("💾 Saved {} bytes to {}", audio.len(), output.display());
        },

        Commands::Personas => {
            let resp = client.get(endpoint_url(&url, "/v1/voices")).send().await?;
            let voices: Vec<VoiceEntry> = check(resp).await?.json().await?;

            println!("🎭 Voice personas:");
            for voice in voices {
                let marker = if voice.configured { "✅" } else { "⚠️ " };
                println!("  {marker} {:<16} \"{}\"", voice.label, voice.value);
            }
        },

        Commands::Health => match client.get(endpoint_url(&url, "/ready")).send().await {
            Ok(resp) if resp.status().is_success() => {
                println!("✅ Healthy");
                std::process::exit(0);
            },
            Ok(resp) => {
                println!("❌ Unhealthy: HTTP {}", resp.status());
                std::process::exit(1);
            },
            Err(e) => {
                println!("❌ Unhealthy: {e}");
                std::process::exit(1);
            },
        },
    }

    Ok(())
}
