//! Tool execution: registry, executors, execution context.

pub mod context;
pub mod executors;
pub mod registry;

pub use context::ToolExecutionContext;
pub use executors::{ToolExecutionError, ToolExecutor, ToolPayload};
pub use registry::ToolRegistry;
