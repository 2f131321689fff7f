//! Roast service - Generates a roast from a user bio

use std::{fmt, sync::Arc, time::Instant};

use domain::Roast;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::InferencePort};

/// Fixed instruction placed before the bio
pub const ROAST_PROMPT_PREAMBLE: &str = "You are a funny and edgy, but never cruel, AI roast generator.\n\nGenerate a roast based on the following bio:\n\n";

/// Input contract for roast generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRoastInput {
    /// The user's biography
    pub bio: String,
}

/// Output contract for roast generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRoastOutput {
    /// The generated roast, unmodified
    pub roast: String,
}

/// JSON schema the model output must satisfy
pub fn roast_output_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "roast": { "type": "string" }
        },
        "required": ["roast"]
    })
}

/// Service that turns a bio into a roast
pub struct RoastService {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for RoastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoastService").finish_non_exhaustive()
    }
}

impl RoastService {
    /// Create a new roast service
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Build the full prompt for a bio
    pub fn compose_prompt(bio: &str) -> String {
        format!("{ROAST_PROMPT_PREAMBLE}{bio}")
    }

    /// Generate a roast
    ///
    /// The bio is not validated here; callers enforce length rules.
    ///
    /// # Errors
    ///
    /// `Generation` when the output is not JSON, lacks a string `roast`, or
    /// the roast is empty. Inference failures propagate unchanged.
    #[instrument(skip(self, input), fields(bio_len = input.bio.len()))]
    pub async fn generate_roast(
        &self,
        input: GenerateRoastInput,
    ) -> Result<GenerateRoastOutput, ApplicationError> {
        let start = Instant::now();
        let prompt = Self::compose_prompt(&input.bio);

        let result = self
            .inference
            .generate_structured(&prompt, &roast_output_schema())
            .await?;

        let roast = parse_roast(&result.content)?;

        debug!(
            model = %result.model,
            tokens = ?result.tokens_used,
            latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            roast_len = roast.text().len(),
            "Roast generated"
        );

        Ok(GenerateRoastOutput {
            roast: roast.into_text(),
        })
    }

    /// Check if the underlying inference is healthy
    pub async fn is_healthy(&self) -> bool {
        self.inference.is_healthy().await
    }

    /// Get the current model name
    pub fn current_model(&self) -> String {
        self.inference.current_model()
    }
}

/// Extract the `roast` field from model output
fn parse_roast(content: &str) -> Result<Roast, ApplicationError> {
    let value: serde_json::Value = serde_json::from_str(content.trim()).map_err(|e| {
        warn!(error = %e, "Model output is not JSON");
        ApplicationError::Generation(format!("model output is not valid JSON: {e}"))
    })?;

    let text = match value.get("roast") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(_) => {
            return Err(ApplicationError::Generation(
                "model output field `roast` is not a string".to_string(),
            ));
        },
        None => {
            return Err(ApplicationError::Generation(
                "model output is missing the `roast` field".to_string(),
            ));
        },
    };

    Roast::new(text)
        .map_err(|_| ApplicationError::Generation("model returned an empty roast".to_string()))
}
