//! Application layer for larder
//!
//! This crate contains the structured-output guard, the tool registry and
//! executors, the assistant orchestrator, and the port definitions the
//! infrastructure layer implements. It depends only on the domain layer.

pub mod config;
pub mod guard;
pub mod ports;
pub mod tools;
pub mod use_cases;

// Re-export commonly used types
pub use config::AssistantLimits;
pub use guard::{GuardError, StructuredOutputGuard};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    dish_log_service::DishLogService,
    grocery_service::GroceryService,
    inventory_service::{InventoryService, NewInventoryItem},
    model_client::{ModelClient, ModelClientError},
    planner_service::PlannerService,
};
pub use tools::{ToolExecutionContext, ToolExecutionError, ToolExecutor, ToolRegistry};
pub use use_cases::assistant::{Assistant, AssistantError, AssistantState};
pub use use_cases::suggestions::{SuggestionError, SuggestionService};
