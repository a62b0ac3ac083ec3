//! Domain layer for larder
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Envelope
//!
//! Every model response must decode into one of two shapes: a plain
//! `message` or a `toolCall`. The envelope is the only structured payload
//! exchanged with the language model.
//!
//! ## Closed tool set
//!
//! The assistant may only invoke the five tools in [`tool::ToolName`];
//! each carries a typed argument schema with a `validate()` predicate.

pub mod assistant;
pub mod chat;
pub mod core;
pub mod dish;
pub mod grocery;
pub mod inventory;
pub mod planner;
pub mod profile;
pub mod prompt;
pub mod suggestion;
pub mod tool;

// Re-export commonly used types
pub use assistant::{
    AssistantEnvelope, PendingToolCall, ToolCallRequest, ToolResult, extract_json,
};
pub use chat::{ChatMessage, MessageRole};
pub use core::DomainError;
pub use dish::{Dish, DishIngredient, IngredientDraft};
pub use grocery::{GroceryItem, GroceryList};
pub use inventory::{InventoryItem, StorageLocation};
pub use planner::{MealType, PlannedMeal};
pub use profile::UserProfile;
pub use suggestion::{
    GroceryItemSuggestion, GrocerySuggestionResponse, MealSuggestion, MealSuggestionResponse,
    WeeklyMealPlan,
};
pub use tool::{ToolArgs, ToolCallError, ToolName, validate_args};
