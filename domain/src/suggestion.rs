//! Typed payloads for the AI suggestion flows.
//!
//! These are the target shapes the structured-output guard decodes the
//! model's suggestion responses into. Field names mirror the JSON schema
//! descriptions embedded in the prompts.

use serde::Deserialize;

/// One suggested meal built from current inventory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestion {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cook_time_minutes: u32,
    #[serde(default)]
    pub required_ingredients: Vec<IngredientInfo>,
    #[serde(default)]
    pub missing_ingredients: Vec<IngredientInfo>,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngredientInfo {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealSuggestionResponse {
    pub suggestions: Vec<MealSuggestion>,
}

/// A seven-day meal plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMealPlan {
    pub week_start: String,
    pub days: Vec<DayMealPlan>,
    #[serde(default)]
    pub prep_plan: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayMealPlan {
    pub date: String,
    pub meals: DayMeals,
}

/// Titles for each slot of a planned day; absent slots are free days.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayMeals {
    pub breakfast: Option<MealIdea>,
    pub lunch: Option<MealIdea>,
    pub dinner: Option<MealIdea>,
    pub snack: Option<MealIdea>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealIdea {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cook_time_minutes: Option<u32>,
}

/// One suggested grocery purchase.
#[derive(Debug, Clone, Deserialize)]
pub struct GroceryItemSuggestion {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// "missing", "low_stock" or "staple".
    pub reason: String,
    /// 1 = high, 2 = medium, 3 = low.
    pub priority: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrocerySuggestionResponse {
    pub items: Vec<GroceryItemSuggestion>,
}
