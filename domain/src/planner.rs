//! Meal-planner domain entities

use crate::core::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Slot of the day a planned meal occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Parse a meal type name, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(DomainError::InvalidMealType(s.to_string())),
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A meal scheduled on the calendar (Entity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub id: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub title: String,
    /// Reference to a logged dish, when the meal was planned from one.
    pub dish_id: Option<String>,
    pub ingredient_names: Vec<String>,
}
