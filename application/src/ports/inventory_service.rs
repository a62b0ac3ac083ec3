//! Inventory Domain Service port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use larder_domain::{DomainError, InventoryItem, StorageLocation};

/// Fields for creating a new inventory item.
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub location: StorageLocation,
    pub purchase_date: DateTime<Utc>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub low_stock_threshold: f64,
}

/// Port over the inventory entity family.
///
/// The quantity invariant (never negative) is owned here: `update_quantity`
/// and `consume_item` fail rather than store a negative quantity.
#[async_trait]
pub trait InventoryService: Send + Sync {
    async fn create_item(&self, item: NewInventoryItem) -> Result<InventoryItem, DomainError>;

    /// Apply a signed delta to an item's quantity. Fails with
    /// [`DomainError::InsufficientInventory`] when the result would be
    /// negative, without mutating anything.
    async fn update_quantity(&self, item_id: &str, delta: f64) -> Result<InventoryItem, DomainError>;

    /// Decrement an item's quantity by a consumed amount. Fails with
    /// [`DomainError::UnitMismatch`] when `unit` differs from the recorded
    /// unit (case-insensitively), or [`DomainError::InsufficientInventory`]
    /// when less than `amount` is available.
    async fn consume_item(&self, item_id: &str, amount: f64, unit: &str) -> Result<(), DomainError>;

    async fn fetch_all_items(&self) -> Result<Vec<InventoryItem>, DomainError>;

    async fn delete_item(&self, item_id: &str) -> Result<(), DomainError>;

    async fn fetch_low_stock_items(&self) -> Result<Vec<InventoryItem>, DomainError>;

    async fn fetch_expiring_soon_items(
        &self,
        days_ahead: u32,
    ) -> Result<Vec<InventoryItem>, DomainError>;
}
