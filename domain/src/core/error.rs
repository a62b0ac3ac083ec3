//! Domain error types

use thiserror::Error;

/// Domain-level errors raised by the entity stores.
///
/// Rule violations (`UnitMismatch`, `InsufficientInventory`, the not-found
/// variants) are not auto-retryable and must be explained to the user.
/// `Persistence` is the one recoverable class: the caller may retry the
/// whole operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Quantity cannot be negative")]
    NegativeQuantity,

    #[error("Invalid location: {0}. Must be one of: pantry, fridge, freezer")]
    InvalidLocation(String),

    #[error("Invalid meal type: {0}. Must be one of: breakfast, lunch, dinner, snack")]
    InvalidMealType(String),

    #[error("Invalid dish data: {0}")]
    InvalidDishData(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Inventory item not found: {0}")]
    ItemNotFound(String),

    #[error("Dish not found: {0}")]
    DishNotFound(String),

    #[error("Planned meal not found: {0}")]
    PlannedMealNotFound(String),

    #[error("Grocery list not found: {0}")]
    GroceryListNotFound(String),

    #[error("Unit mismatch for {item_name}: expected {expected}, but provided {provided}")]
    UnitMismatch {
        item_name: String,
        expected: String,
        provided: String,
    },

    #[error(
        "Insufficient inventory for {item_name}: available {available}, but requested {requested}"
    )]
    InsufficientInventory {
        item_name: String,
        available: f64,
        requested: f64,
    },

    #[error("Database error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Whether retrying the same operation could succeed.
    ///
    /// Only persistence failures qualify — domain-rule violations are
    /// deterministic.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::Persistence(_))
    }
}
