//! Structured Output Guard
//!
//! Wraps the Model Client and coerces free-text model output into a typed
//! value. Decoding success is the only correctness signal: on a decode
//! failure the guard sends one correction prompt quoting the failed
//! response, and fails terminally if the second response does not decode
//! either. Never more than two model calls per invocation; transport
//! errors propagate immediately and do not consume the retry.

use crate::ports::model_client::{ModelClient, ModelClientError};
use larder_domain::extract_json;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;

/// Terminal guard failures.
#[derive(Error, Debug)]
pub enum GuardError {
    #[error(transparent)]
    Client(#[from] ModelClientError),

    /// Both attempts produced undecodable text. Carries both raw
    /// responses for diagnostics.
    #[error("Model output could not be decoded as the requested structure")]
    MalformedOutput { first: String, second: String },
}

const FORMAT_REQUIREMENTS: &str = "\
STRICT OUTPUT REQUIREMENTS:
- Respond with JSON only.
- No markdown fences, no commentary, no extra keys.
- All required fields must be present.";

pub struct StructuredOutputGuard {
    client: Arc<dyn ModelClient>,
}

impl StructuredOutputGuard {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Fetch a typed value from the model.
    ///
    /// `schema_description` is embedded in the prompt as guidance, not
    /// enforced by a parser; the decode into `T` is what decides success.
    pub async fn fetch_structured<T: DeserializeOwned>(
        &self,
        schema_description: &str,
        primary_prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<T, GuardError> {
        let prompt = format!(
            "{primary_prompt}\n\nRespond using this JSON schema:\n{schema_description}\n\n{FORMAT_REQUIREMENTS}"
        );

        let first = self
            .client
            .generate_content(&prompt, system_instruction)
            .await?;
        match decode::<T>(&first) {
            Ok(value) => return Ok(value),
            Err(reason) => {
                tracing::debug!(%reason, "first model response did not decode, retrying once");
            }
        }

        let correction = format!(
            "Your previous response could not be parsed as JSON matching the requested schema.\n\n\
             Original request:\n{primary_prompt}\n\n\
             Required schema:\n{schema_description}\n\n\
             Your previous response:\n{first}\n\n\
             Fix the JSON syntax, remove any markdown or commentary, and respond again.\n\n{FORMAT_REQUIREMENTS}"
        );
        let second = self
            .client
            .generate_content(&correction, system_instruction)
            .await?;
        match decode::<T>(&second) {
            Ok(value) => Ok(value),
            Err(reason) => {
                tracing::warn!(%reason, "second model response did not decode, giving up");
                Err(GuardError::MalformedOutput { first, second })
            }
        }
    }
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let normalized = extract_json(raw);
    serde_json::from_str(&normalized).map_err(|e| e.to_string())
}
