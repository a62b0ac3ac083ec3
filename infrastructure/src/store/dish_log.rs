//! Dish-log service over the in-memory store, including the atomic
//! log-dish operation.
//!
//! `log_dish` runs entirely under one write guard: every referenced
//! inventory decrement is validated before any is applied, so a failure
//! leaves zero observable changes. Ingredients without an inventory
//! reference are recorded on the dish but never touch quantities.

use crate::store::MemoryStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use larder_application::ports::dish_log_service::DishLogService;
use larder_domain::{Dish, DishIngredient, DomainError, IngredientDraft};

#[async_trait]
impl DishLogService for MemoryStore {
    async fn log_dish(
        &self,
        name: String,
        servings: u32,
        date_cooked: DateTime<Utc>,
        steps: Option<String>,
        ingredients: Vec<IngredientDraft>,
    ) -> Result<Dish, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidDishData(
                "dish name cannot be empty".to_string(),
            ));
        }
        if servings == 0 {
            return Err(DomainError::InvalidDishData(
                "servings must be at least 1".to_string(),
            ));
        }
        if ingredients.is_empty() {
            return Err(DomainError::InvalidDishData(
                "at least one ingredient is required".to_string(),
            ));
        }

        let mut state = self.write();

        // Pass 1: validate every decrement. (item index, amount) pairs are
        // collected so pass 2 applies exactly what was checked.
        let mut decrements: Vec<(usize, f64)> = Vec::new();
        let mut records: Vec<DishIngredient> = Vec::with_capacity(ingredients.len());
        for draft in &ingredients {
            match draft.inventory_item_id.as_deref() {
                Some(item_id) => {
                    let (index, item) = state
                        .items
                        .iter()
                        .enumerate()
                        .find(|(_, i)| i.id == item_id)
                        .ok_or_else(|| DomainError::ItemNotFound(item_id.to_string()))?;
                    if !item.unit_matches(&draft.unit) {
                        return Err(DomainError::UnitMismatch {
                            item_name: item.name.clone(),
                            expected: item.unit.clone(),
                            provided: draft.unit.clone(),
                        });
                    }
                    if item.quantity < draft.amount {
                        return Err(DomainError::InsufficientInventory {
                            item_name: item.name.clone(),
                            available: item.quantity,
                            requested: draft.amount,
                        });
                    }
                    decrements.push((index, draft.amount));
                    records.push(DishIngredient {
                        inventory_item_id: Some(item.id.clone()),
                        name: draft.name.clone().or_else(|| Some(item.name.clone())),
                        amount_used: draft.amount,
                        unit: draft.unit.clone(),
                    });
                }
                None => {
                    records.push(DishIngredient {
                        inventory_item_id: None,
                        name: draft.name.clone(),
                        amount_used: draft.amount,
                        unit: draft.unit.clone(),
                    });
                }
            }
        }

        // Pass 2: everything validated, apply all decrements and commit
        // the dish.
        let now = Utc::now();
        for (index, amount) in decrements {
            let item = &mut state.items[index];
            item.quantity -= amount;
            item.updated_at = now;
        }
        let dish = Dish {
            id: Self::next_id(),
            name,
            servings,
            date_cooked,
            steps,
            ingredients: records,
            updated_at: now,
        };
        state.dishes.push(dish.clone());
        tracing::debug!(dish_id = %dish.id, ingredients = dish.ingredients.len(), "dish committed");
        Ok(dish)
    }

    async fn fetch_all_dishes(&self) -> Result<Vec<Dish>, DomainError> {
        Ok(self.read().dishes.clone())
    }

    async fn delete_dish(&self, dish_id: &str) -> Result<(), DomainError> {
        let mut state = self.write();
        let before = state.dishes.len();
        state.dishes.retain(|d| d.id != dish_id);
        if state.dishes.len() == before {
            return Err(DomainError::DishNotFound(dish_id.to_string()));
        }
        Ok(())
    }
}
