//! Model Client port
//!
//! Defines the interface for the opaque text-in/text-out language model
//! call. The adapter (the backend proxy client) lives in the
//! infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the model transport.
///
/// These propagate immediately to the caller and never consume the
/// structured-output guard's retry attempt.
#[derive(Error, Debug)]
pub enum ModelClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Rate limited, try again shortly")]
    RateLimited,

    #[error("Invalid response from backend: {0}")]
    InvalidResponse(String),

    #[error("Backend not configured: {0}")]
    NotConfigured(String),
}

/// Port for language model communication.
///
/// Single operation, opaque text in and out; all structure is recovered
/// by the guard on top of it.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate_content(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<String, ModelClientError>;
}
