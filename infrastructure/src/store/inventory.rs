//! Inventory service over the in-memory store.

use crate::store::MemoryStore;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use larder_application::ports::inventory_service::{InventoryService, NewInventoryItem};
use larder_domain::{DomainError, InventoryItem};

#[async_trait]
impl InventoryService for MemoryStore {
    async fn create_item(&self, new: NewInventoryItem) -> Result<InventoryItem, DomainError> {
        if new.name.trim().is_empty() {
            return Err(DomainError::ValidationFailed(
                "item name cannot be empty".to_string(),
            ));
        }
        if new.quantity < 0.0 {
            return Err(DomainError::NegativeQuantity);
        }
        let item = InventoryItem {
            id: Self::next_id(),
            name: new.name,
            category: new.category,
            quantity: new.quantity,
            unit: new.unit,
            location: new.location,
            purchase_date: new.purchase_date,
            expiry_date: new.expiry_date,
            low_stock_threshold: new.low_stock_threshold,
            updated_at: Utc::now(),
        };
        let mut state = self.write();
        state.items.push(item.clone());
        Ok(item)
    }

    async fn update_quantity(
        &self,
        item_id: &str,
        delta: f64,
    ) -> Result<InventoryItem, DomainError> {
        let mut state = self.write();
        let item = state
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| DomainError::ItemNotFound(item_id.to_string()))?;
        let new_quantity = item.quantity + delta;
        if new_quantity < 0.0 {
            return Err(DomainError::InsufficientInventory {
                item_name: item.name.clone(),
                available: item.quantity,
                requested: delta.abs(),
            });
        }
        item.quantity = new_quantity;
        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    async fn consume_item(
        &self,
        item_id: &str,
        amount: f64,
        unit: &str,
    ) -> Result<(), DomainError> {
        let mut state = self.write();
        let item = state
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| DomainError::ItemNotFound(item_id.to_string()))?;
        if !item.unit_matches(unit) {
            return Err(DomainError::UnitMismatch {
                item_name: item.name.clone(),
                expected: item.unit.clone(),
                provided: unit.to_string(),
            });
        }
        if item.quantity < amount {
            return Err(DomainError::InsufficientInventory {
                item_name: item.name.clone(),
                available: item.quantity,
                requested: amount,
            });
        }
        item.quantity -= amount;
        item.updated_at = Utc::now();
        Ok(())
    }

    async fn fetch_all_items(&self) -> Result<Vec<InventoryItem>, DomainError> {
        Ok(self.read().items.clone())
    }

    async fn delete_item(&self, item_id: &str) -> Result<(), DomainError> {
        let mut state = self.write();
        let referenced = state.dishes.iter().any(|dish| {
            dish.ingredients
                .iter()
                .any(|i| i.inventory_item_id.as_deref() == Some(item_id))
        });
        if referenced {
            return Err(DomainError::ValidationFailed(
                "item is referenced by a logged dish".to_string(),
            ));
        }
        let before = state.items.len();
        state.items.retain(|i| i.id != item_id);
        if state.items.len() == before {
            return Err(DomainError::ItemNotFound(item_id.to_string()));
        }
        Ok(())
    }

    async fn fetch_low_stock_items(&self) -> Result<Vec<InventoryItem>, DomainError> {
        Ok(self
            .read()
            .items
            .iter()
            .filter(|i| i.is_low_stock())
            .cloned()
            .collect())
    }

    async fn fetch_expiring_soon_items(
        &self,
        days_ahead: u32,
    ) -> Result<Vec<InventoryItem>, DomainError> {
        let cutoff = Utc::now() + Duration::days(days_ahead as i64);
        Ok(self
            .read()
            .items
            .iter()
            .filter(|i| i.expiry_date.is_some_and(|e| e <= cutoff))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_domain::StorageLocation;

    fn new_item(name: &str, quantity: f64, unit: &str) -> NewInventoryItem {
        NewInventoryItem {
            name: name.to_string(),
            category: "test".to_string(),
            quantity,
            unit: unit.to_string(),
            location: StorageLocation::Pantry,
            purchase_date: Utc::now(),
            expiry_date: None,
            low_stock_threshold: 0.0,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = MemoryStore::new();
        let a = store.create_item(new_item("Rice", 500.0, "g")).await.unwrap();
        let b = store.create_item(new_item("Rice", 500.0, "g")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_quantity() {
        let store = MemoryStore::new();
        assert_eq!(
            store.create_item(new_item("Rice", -1.0, "g")).await.unwrap_err(),
            DomainError::NegativeQuantity
        );
    }

    #[tokio::test]
    async fn test_update_quantity_never_goes_negative() {
        let store = MemoryStore::new();
        let item = store.create_item(new_item("Rice", 100.0, "g")).await.unwrap();
        let err = store.update_quantity(&item.id, -150.0).await.unwrap_err();
        assert!(matches!(err, DomainError::InsufficientInventory { .. }));
        // Unchanged after the failed update.
        assert_eq!(store.fetch_all_items().await.unwrap()[0].quantity, 100.0);
    }

    #[tokio::test]
    async fn test_consume_full_quantity_leaves_zero() {
        let store = MemoryStore::new();
        let item = store.create_item(new_item("Milk", 1.0, "L")).await.unwrap();
        store.consume_item(&item.id, 1.0, "L").await.unwrap();
        assert_eq!(store.fetch_all_items().await.unwrap()[0].quantity, 0.0);
    }

    #[tokio::test]
    async fn test_consume_unit_mismatch_is_case_insensitive() {
        let store = MemoryStore::new();
        let item = store.create_item(new_item("Flour", 2.0, "kg")).await.unwrap();

        // Case-only difference succeeds.
        store.consume_item(&item.id, 1.0, "KG").await.unwrap();

        // Truly different unit fails.
        let err = store.consume_item(&item.id, 1.0, "g").await.unwrap_err();
        assert_eq!(
            err,
            DomainError::UnitMismatch {
                item_name: "Flour".to_string(),
                expected: "kg".to_string(),
                provided: "g".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_low_stock_detection() {
        let store = MemoryStore::new();
        let mut low = new_item("Salt", 50.0, "g");
        low.low_stock_threshold = 100.0;
        store.create_item(low).await.unwrap();
        store.create_item(new_item("Rice", 500.0, "g")).await.unwrap();

        let low_stock = store.fetch_low_stock_items().await.unwrap();
        assert_eq!(low_stock.len(), 1);
        assert_eq!(low_stock[0].name, "Salt");
    }

    #[tokio::test]
    async fn test_expiring_soon_filter() {
        let store = MemoryStore::new();
        let mut soon = new_item("Milk", 1.0, "L");
        soon.expiry_date = Some(Utc::now() + Duration::days(2));
        store.create_item(soon).await.unwrap();
        let mut later = new_item("Cheese", 1.0, "pcs");
        later.expiry_date = Some(Utc::now() + Duration::days(30));
        store.create_item(later).await.unwrap();

        let expiring = store.fetch_expiring_soon_items(7).await.unwrap();
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].name, "Milk");
    }

    #[tokio::test]
    async fn test_delete_missing_item_fails() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.delete_item("ghost").await.unwrap_err(),
            DomainError::ItemNotFound(_)
        ));
    }
}
