//! Grocery service over the in-memory store.
//!
//! List generation aggregates two sources over the day horizon: planned
//! meal ingredients that have no in-stock inventory item ("missing",
//! high priority) and items at or below their low-stock threshold
//! ("low_stock", medium priority). Names are deduplicated
//! case-insensitively, missing ingredients winning.

use crate::store::MemoryStore;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use larder_application::ports::grocery_service::GroceryService;
use larder_domain::{DomainError, GroceryItem, GroceryList};

#[async_trait]
impl GroceryService for MemoryStore {
    async fn generate_grocery_list(
        &self,
        days_ahead: u32,
        include_planned_meals: bool,
        include_low_stock: bool,
    ) -> Result<GroceryList, DomainError> {
        let mut state = self.write();
        let today = Utc::now().date_naive();
        let horizon = today + Duration::days(days_ahead as i64);

        let mut items: Vec<GroceryItem> = Vec::new();
        let mut seen: Vec<String> = Vec::new();
        let push = |items: &mut Vec<GroceryItem>,
                    seen: &mut Vec<String>,
                    name: String,
                    quantity: f64,
                    unit: String,
                    reason: &str,
                    priority: u8| {
            let key = name.to_lowercase();
            if seen.contains(&key) {
                return;
            }
            seen.push(key);
            items.push(GroceryItem {
                id: Self::next_id(),
                name,
                quantity,
                unit,
                reason: reason.to_string(),
                priority,
                is_purchased: false,
            });
        };

        if include_planned_meals {
            for meal in state.meals.iter().filter(|m| m.date >= today && m.date <= horizon) {
                for name in &meal.ingredient_names {
                    let in_stock = state.items.iter().any(|item| {
                        item.name.eq_ignore_ascii_case(name) && item.quantity > 0.0
                    });
                    if !in_stock {
                        push(
                            &mut items,
                            &mut seen,
                            name.clone(),
                            1.0,
                            "pcs".to_string(),
                            "missing",
                            1,
                        );
                    }
                }
            }
        }

        if include_low_stock {
            for item in state.items.iter().filter(|i| i.is_low_stock()) {
                push(
                    &mut items,
                    &mut seen,
                    item.name.clone(),
                    item.low_stock_threshold,
                    item.unit.clone(),
                    "low_stock",
                    2,
                );
            }
        }

        let list = GroceryList {
            id: Self::next_id(),
            created_at: Utc::now(),
            days_ahead,
            items,
        };
        state.lists.push(list.clone());
        tracing::debug!(list_id = %list.id, items = list.items.len(), "grocery list generated");
        Ok(list)
    }

    async fn create_grocery_list(&self, days_ahead: u32) -> Result<GroceryList, DomainError> {
        let list = GroceryList {
            id: Self::next_id(),
            created_at: Utc::now(),
            days_ahead,
            items: Vec::new(),
        };
        let mut state = self.write();
        state.lists.push(list.clone());
        Ok(list)
    }

    async fn add_item_to_list(
        &self,
        list_id: &str,
        name: String,
        quantity: f64,
        unit: String,
        reason: String,
        priority: u8,
    ) -> Result<GroceryList, DomainError> {
        if !(1..=3).contains(&priority) {
            return Err(DomainError::ValidationFailed(
                "priority must be 1, 2 or 3".to_string(),
            ));
        }
        let mut state = self.write();
        let list = state
            .lists
            .iter_mut()
            .find(|l| l.id == list_id)
            .ok_or_else(|| DomainError::GroceryListNotFound(list_id.to_string()))?;
        list.items.push(GroceryItem {
            id: Self::next_id(),
            name,
            quantity,
            unit,
            reason,
            priority,
            is_purchased: false,
        });
        Ok(list.clone())
    }

    async fn fetch_active_list(&self) -> Result<Option<GroceryList>, DomainError> {
        Ok(self.read().lists.last().cloned())
    }
}
