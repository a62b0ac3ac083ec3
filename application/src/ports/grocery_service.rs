//! Grocery Domain Service port.

use async_trait::async_trait;
use larder_domain::{DomainError, GroceryList};

/// Port over grocery lists.
///
/// List generation (missing-ingredient and low-stock aggregation) is the
/// adapter's responsibility; callers only choose the day horizon.
#[async_trait]
pub trait GroceryService: Send + Sync {
    /// Generate a list for the next `days_ahead` days from low-stock items
    /// and planned-meal ingredients missing from inventory.
    async fn generate_grocery_list(
        &self,
        days_ahead: u32,
        include_planned_meals: bool,
        include_low_stock: bool,
    ) -> Result<GroceryList, DomainError>;

    /// Create an empty list for manual editing.
    async fn create_grocery_list(&self, days_ahead: u32) -> Result<GroceryList, DomainError>;

    async fn add_item_to_list(
        &self,
        list_id: &str,
        name: String,
        quantity: f64,
        unit: String,
        reason: String,
        priority: u8,
    ) -> Result<GroceryList, DomainError>;

    /// The most recently created list, if any.
    async fn fetch_active_list(&self) -> Result<Option<GroceryList>, DomainError>;
}
