//! Dish Log Domain Service port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use larder_domain::{Dish, DomainError, IngredientDraft};

/// Port over cooked dishes, including the atomic logging operation.
#[async_trait]
pub trait DishLogService: Send + Sync {
    /// Create a dish with its ingredient records and decrement every
    /// referenced inventory item, all-or-nothing: if any decrement cannot
    /// be applied (insufficient quantity or unit mismatch), no dish is
    /// persisted and no quantity changes. Ingredients without an inventory
    /// reference are recorded but never decremented.
    async fn log_dish(
        &self,
        name: String,
        servings: u32,
        date_cooked: DateTime<Utc>,
        steps: Option<String>,
        ingredients: Vec<IngredientDraft>,
    ) -> Result<Dish, DomainError>;

    async fn fetch_all_dishes(&self) -> Result<Vec<Dish>, DomainError>;

    async fn delete_dish(&self, dish_id: &str) -> Result<(), DomainError>;
}
