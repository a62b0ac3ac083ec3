//! Tool-call validation errors.
//!
//! All three variants are user-facing and recoverable: the assistant
//! explains the problem and may re-prompt the user, but the orchestrator
//! never auto-retries a rejected tool call.

use thiserror::Error;

/// Why a proposed tool call was rejected before execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolCallError {
    /// The name is not in the closed tool set.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The argument bag could not be decoded into the tool's typed schema.
    #[error("Invalid arguments for tool '{tool}': {reason}")]
    ArgumentDecode { tool: String, reason: String },

    /// The decoded arguments violated a schema rule.
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },
}

impl ToolCallError {
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ToolCallError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
