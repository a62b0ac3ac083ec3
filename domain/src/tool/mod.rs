//! The closed tool set: names, argument schemas, validation errors.

pub mod entities;
pub mod value_objects;

pub use entities::{
    AddInventoryItemArgs, CreatePlannedMealArgs, GenerateGroceryListArgs, IngredientUsage,
    LogCookedDishArgs, ToolArgs, ToolName, UpdateInventoryQuantityArgs, validate_args,
};
pub use value_objects::ToolCallError;
