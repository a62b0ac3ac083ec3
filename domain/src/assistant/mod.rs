//! Assistant turn types: the response envelope and output normalization.

pub mod envelope;
pub mod recovery;

pub use envelope::{AssistantEnvelope, PendingToolCall, ToolCallRequest, ToolResult};
pub use recovery::extract_json;
