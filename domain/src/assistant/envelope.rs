//! The assistant response envelope.
//!
//! Every model response the orchestrator consumes must decode into one of
//! exactly two shapes: a plain `message` or a `toolCall`. The tool name is
//! kept as a raw string here so that an unknown tool surfaces as a
//! recoverable registry validation error rather than a decode failure
//! (which would burn the guard's retry).

use crate::tool::{ToolArgs, ToolName};
use serde::{Deserialize, Serialize};

/// A proposed tool invocation as decoded from a `toolCall` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallRequest {
    pub tool: String,
    pub args: ToolArgs,
    pub request_id: String,
    pub confirmation_required: bool,
    pub confirmation_message: Option<String>,
}

/// The two shapes a model response may take.
///
/// Decoding fails when a `toolCall` carries an empty `tool` or an empty
/// `requestId`, so the guard's retry path fires for those responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawEnvelope")]
pub enum AssistantEnvelope {
    Message { content: String },
    ToolCall(ToolCallRequest),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum RawEnvelope {
    #[serde(rename = "message")]
    Message { content: String },
    #[serde(rename = "toolCall")]
    ToolCall {
        tool: String,
        #[serde(default)]
        args: ToolArgs,
        #[serde(rename = "requestId")]
        request_id: String,
        #[serde(rename = "confirmationRequired", default)]
        confirmation_required: bool,
        #[serde(rename = "confirmationMessage", default)]
        confirmation_message: Option<String>,
    },
}

impl TryFrom<RawEnvelope> for AssistantEnvelope {
    type Error = String;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        match raw {
            RawEnvelope::Message { content } => Ok(AssistantEnvelope::Message { content }),
            RawEnvelope::ToolCall {
                tool,
                args,
                request_id,
                confirmation_required,
                confirmation_message,
            } => {
                if tool.trim().is_empty() {
                    return Err("toolCall envelope requires a non-empty tool name".to_string());
                }
                if request_id.trim().is_empty() {
                    return Err("toolCall envelope requires a non-empty requestId".to_string());
                }
                Ok(AssistantEnvelope::ToolCall(ToolCallRequest {
                    tool,
                    args,
                    request_id,
                    confirmation_required,
                    confirmation_message,
                }))
            }
        }
    }
}

/// A validated tool call awaiting user confirmation.
///
/// Ephemeral: exists only between "assistant proposed a gated call" and
/// "user confirmed or cancelled". At most one per conversation.
#[derive(Debug, Clone)]
pub struct PendingToolCall {
    pub request_id: String,
    pub tool: ToolName,
    pub args: ToolArgs,
    pub confirmation_message: Option<String>,
}

/// Outcome of exactly one executor invocation.
///
/// Serialized into the follow-up prompt so the model can explain what
/// happened; the `error` field carries the user-facing failure message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub request_id: String,
    pub tool: ToolName,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success(
        request_id: impl Into<String>,
        tool: ToolName,
        result: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            tool,
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(request_id: impl Into<String>, tool: ToolName, error: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            tool,
            success: false,
            result: None,
            error: Some(error.into()),
        }
    }
}
