//! User profile — dietary preferences fed into prompts.

use serde::{Deserialize, Serialize};

/// The user's dietary preferences and constraints.
///
/// Only the non-sensitive fields that prompts actually consume; the core
/// never mutates the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub dietary_preference: String,
    pub allergies: Vec<String>,
    pub disliked_ingredients: Vec<String>,
    pub preferred_cuisines: Vec<String>,
    pub max_cook_time_minutes: Option<u32>,
    pub calorie_target: Option<u32>,
}
