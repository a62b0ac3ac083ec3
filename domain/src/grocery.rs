//! Grocery list domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generated or manually created shopping list (Entity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryList {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Planning horizon the list was generated for.
    pub days_ahead: u32,
    pub items: Vec<GroceryItem>,
}

/// One entry on a grocery list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// Why the item is on the list: "missing", "low_stock" or "staple".
    pub reason: String,
    /// 1 = high, 2 = medium, 3 = low.
    pub priority: u8,
    pub is_purchased: bool,
}
