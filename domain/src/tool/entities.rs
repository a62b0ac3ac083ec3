//! The closed tool set and its typed argument schemas.
//!
//! Each tool the assistant may invoke has exactly one [`ToolName`] case,
//! one argument struct decoded from the envelope's JSON bag, and one
//! `validate()` predicate. Adding a tool means adding all three plus an
//! executor binding — nothing else in the system can invoke an operation
//! outside this set.
//!
//! Schemas are pure data: they reference domain entities only by opaque
//! id string and perform no I/O.

use crate::tool::value_objects::ToolCallError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::str::FromStr;

/// Closed enumeration of invokable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
pub enum ToolName {
    #[serde(rename = "addInventoryItem")]
    AddInventoryItem,
    #[serde(rename = "updateInventoryQuantity")]
    UpdateInventoryQuantity,
    #[serde(rename = "createPlannedMeal")]
    CreatePlannedMeal,
    #[serde(rename = "generateGroceryList")]
    GenerateGroceryList,
    #[serde(rename = "logCookedDish")]
    LogCookedDish,
}

impl ToolName {
    pub const ALL: [ToolName; 5] = [
        ToolName::AddInventoryItem,
        ToolName::UpdateInventoryQuantity,
        ToolName::CreatePlannedMeal,
        ToolName::GenerateGroceryList,
        ToolName::LogCookedDish,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ToolName::AddInventoryItem => "addInventoryItem",
            ToolName::UpdateInventoryQuantity => "updateInventoryQuantity",
            ToolName::CreatePlannedMeal => "createPlannedMeal",
            ToolName::GenerateGroceryList => "generateGroceryList",
            ToolName::LogCookedDish => "logCookedDish",
        }
    }
}

impl FromStr for ToolName {
    type Err = ToolCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| ToolCallError::UnknownTool(s.to_string()))
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// JSON argument bag as received in a toolCall envelope.
pub type ToolArgs = serde_json::Map<String, serde_json::Value>;

fn decode_args<T: serde::de::DeserializeOwned>(
    tool: ToolName,
    args: &ToolArgs,
) -> Result<T, ToolCallError> {
    serde_json::from_value(serde_json::Value::Object(args.clone())).map_err(|e| {
        ToolCallError::ArgumentDecode {
            tool: tool.as_str().to_string(),
            reason: e.to_string(),
        }
    })
}

fn is_iso_date(s: &str) -> bool {
    NaiveDate::from_str(s).is_ok()
}

fn is_iso_date_or_datetime(s: &str) -> bool {
    NaiveDateTime::from_str(s).is_ok() || NaiveDate::from_str(s).is_ok()
}

const ALLOWED_LOCATIONS: [&str; 3] = ["pantry", "fridge", "freezer"];
const ALLOWED_MEAL_TYPES: [&str; 4] = ["breakfast", "lunch", "dinner", "snack"];

/// Arguments for `addInventoryItem`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddInventoryItemArgs {
    pub name: String,
    pub category: Option<String>,
    pub quantity: f64,
    pub unit: String,
    pub location: String,
    #[serde(rename = "expiryDate")]
    pub expiry_date: Option<String>,
}

impl AddInventoryItemArgs {
    pub fn decode(args: &ToolArgs) -> Result<Self, ToolCallError> {
        decode_args(ToolName::AddInventoryItem, args)
    }

    pub fn validate(&self) -> Result<(), ToolCallError> {
        if self.name.trim().is_empty() {
            return Err(ToolCallError::invalid_argument("name", "Name cannot be empty"));
        }
        if self.quantity <= 0.0 {
            return Err(ToolCallError::invalid_argument(
                "quantity",
                "Quantity must be greater than zero",
            ));
        }
        if self.unit.trim().is_empty() {
            return Err(ToolCallError::invalid_argument("unit", "Unit cannot be empty"));
        }
        if !ALLOWED_LOCATIONS.contains(&self.location.to_lowercase().as_str()) {
            return Err(ToolCallError::invalid_argument(
                "location",
                "Location must be one of: pantry, fridge, freezer",
            ));
        }
        Ok(())
    }
}

/// Arguments for `updateInventoryQuantity`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInventoryQuantityArgs {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub delta: f64,
}

impl UpdateInventoryQuantityArgs {
    pub fn decode(args: &ToolArgs) -> Result<Self, ToolCallError> {
        decode_args(ToolName::UpdateInventoryQuantity, args)
    }

    pub fn validate(&self) -> Result<(), ToolCallError> {
        // Zero delta is meaningless; bounds are checked at execution time
        // against the item's actual quantity.
        if self.delta == 0.0 {
            return Err(ToolCallError::invalid_argument("delta", "Delta cannot be zero"));
        }
        Ok(())
    }
}

/// Arguments for `createPlannedMeal`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlannedMealArgs {
    pub date: String,
    #[serde(rename = "mealType")]
    pub meal_type: String,
    pub title: Option<String>,
    #[serde(rename = "dishId")]
    pub dish_id: Option<String>,
}

impl CreatePlannedMealArgs {
    pub fn decode(args: &ToolArgs) -> Result<Self, ToolCallError> {
        decode_args(ToolName::CreatePlannedMeal, args)
    }

    pub fn validate(&self) -> Result<(), ToolCallError> {
        if !is_iso_date(&self.date) {
            return Err(ToolCallError::invalid_argument(
                "date",
                "Date must be in ISO format (YYYY-MM-DD)",
            ));
        }
        if !ALLOWED_MEAL_TYPES.contains(&self.meal_type.to_lowercase().as_str()) {
            return Err(ToolCallError::invalid_argument(
                "mealType",
                "Meal type must be one of: breakfast, lunch, dinner, snack",
            ));
        }
        let has_title = self.title.as_deref().is_some_and(|t| !t.trim().is_empty());
        let has_dish = self.dish_id.as_deref().is_some_and(|d| !d.trim().is_empty());
        if !has_title && !has_dish {
            return Err(ToolCallError::invalid_argument(
                "title/dishId",
                "Either title or dishId must be provided",
            ));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

/// Arguments for `generateGroceryList`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateGroceryListArgs {
    #[serde(rename = "daysAhead")]
    pub days_ahead: i64,
    #[serde(rename = "includePlannedMeals", default = "default_true")]
    pub include_planned_meals: bool,
    #[serde(rename = "includeLowStock", default = "default_true")]
    pub include_low_stock: bool,
}

impl GenerateGroceryListArgs {
    pub fn decode(args: &ToolArgs) -> Result<Self, ToolCallError> {
        decode_args(ToolName::GenerateGroceryList, args)
    }

    pub fn validate(&self) -> Result<(), ToolCallError> {
        if !(1..=14).contains(&self.days_ahead) {
            return Err(ToolCallError::invalid_argument(
                "daysAhead",
                "Days ahead must be between 1 and 14",
            ));
        }
        Ok(())
    }
}

/// Arguments for `logCookedDish`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogCookedDishArgs {
    pub name: String,
    pub servings: i64,
    #[serde(rename = "dateCooked")]
    pub date_cooked: String,
    #[serde(rename = "ingredientsUsed")]
    pub ingredients_used: Vec<IngredientUsage>,
}

/// One inventory decrement requested by `logCookedDish`.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientUsage {
    #[serde(rename = "inventoryItemId")]
    pub inventory_item_id: String,
    pub quantity: f64,
    pub unit: String,
}

impl LogCookedDishArgs {
    pub fn decode(args: &ToolArgs) -> Result<Self, ToolCallError> {
        decode_args(ToolName::LogCookedDish, args)
    }

    pub fn validate(&self) -> Result<(), ToolCallError> {
        if self.name.trim().is_empty() {
            return Err(ToolCallError::invalid_argument(
                "name",
                "Dish name cannot be empty",
            ));
        }
        if self.servings < 1 {
            return Err(ToolCallError::invalid_argument(
                "servings",
                "Servings must be at least 1",
            ));
        }
        if self.ingredients_used.is_empty() {
            return Err(ToolCallError::invalid_argument(
                "ingredientsUsed",
                "At least one ingredient is required",
            ));
        }
        if !is_iso_date_or_datetime(&self.date_cooked) {
            return Err(ToolCallError::invalid_argument(
                "dateCooked",
                "Date must be in ISO format",
            ));
        }
        for ingredient in &self.ingredients_used {
            if ingredient.quantity <= 0.0 {
                return Err(ToolCallError::invalid_argument(
                    "ingredientsUsed",
                    "All ingredient quantities must be greater than zero",
                ));
            }
        }
        Ok(())
    }
}

/// Decode and validate an argument bag for any tool in the closed set.
///
/// Used by the registry for pre-confirmation validation; executors call
/// the per-tool `decode` + `validate` pair again defensively.
pub fn validate_args(tool: ToolName, args: &ToolArgs) -> Result<(), ToolCallError> {
    match tool {
        ToolName::AddInventoryItem => AddInventoryItemArgs::decode(args)?.validate(),
        ToolName::UpdateInventoryQuantity => UpdateInventoryQuantityArgs::decode(args)?.validate(),
        ToolName::CreatePlannedMeal => CreatePlannedMealArgs::decode(args)?.validate(),
        ToolName::GenerateGroceryList => GenerateGroceryListArgs::decode(args)?.validate(),
        ToolName::LogCookedDish => LogCookedDishArgs::decode(args)?.validate(),
    }
}
