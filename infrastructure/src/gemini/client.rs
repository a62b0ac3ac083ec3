//! HTTP client for the backend model proxy.
//!
//! The backend forwards prompts to the upstream Gemini API and returns
//! plain text, keeping the API key out of the client. Contract:
//! `POST <base>/api/generate` with `{ prompt, systemInstruction? }`,
//! responding `{ text }` on success or `{ error }` on failure.

use async_trait::async_trait;
use larder_application::ports::model_client::{ModelClient, ModelClientError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<&'a str>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    text: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

pub struct GeminiProxyClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GeminiProxyClient {
    /// Build a client for the given backend base URL. A trailing slash on
    /// the base URL is tolerated.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ModelClientError> {
        let base = base_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(ModelClientError::NotConfigured(
                "backend base URL is empty".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelClientError::NotConfigured(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: format!("{base}/api/generate"),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ModelClient for GeminiProxyClient {
    async fn generate_content(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<String, ModelClientError> {
        let request = GenerateRequest {
            prompt,
            system_instruction,
        };

        tracing::debug!(endpoint = %self.endpoint, prompt_bytes = prompt.len(), "sending generate request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelClientError::Network(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ModelClientError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error)
                .unwrap_or(body);
            return Err(ModelClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ModelClientError::InvalidResponse(e.to_string()))?;
        Ok(body.text)
    }
}
