//! Cook-log domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cooked dish recorded in the cook log (Entity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub servings: u32,
    pub date_cooked: DateTime<Utc>,
    pub steps: Option<String>,
    pub ingredients: Vec<DishIngredient>,
    pub updated_at: DateTime<Utc>,
}

/// One ingredient record attached to a logged dish.
///
/// `inventory_item_id` is present only for ingredients that came out of
/// inventory; free-form ingredients carry just a name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishIngredient {
    pub inventory_item_id: Option<String>,
    pub name: Option<String>,
    pub amount_used: f64,
    pub unit: String,
}

/// Input for logging one ingredient of a dish, before the store has
/// resolved or validated anything.
#[derive(Debug, Clone)]
pub struct IngredientDraft {
    /// Stable id of the inventory item to decrement, if any.
    pub inventory_item_id: Option<String>,
    /// Display name; falls back to the resolved item's name when absent.
    pub name: Option<String>,
    pub amount: f64,
    pub unit: String,
}

impl IngredientDraft {
    pub fn from_inventory(item_id: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            inventory_item_id: Some(item_id.into()),
            name: None,
            amount,
            unit: unit.into(),
        }
    }

    pub fn free_form(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            inventory_item_id: None,
            name: Some(name.into()),
            amount,
            unit: unit.into(),
        }
    }
}
