//! Prompt construction for the suggestion flows.

use crate::inventory::InventoryItem;
use crate::planner::PlannedMeal;
use crate::profile::UserProfile;
use chrono::NaiveDate;
use std::fmt::Write;

/// Shared system instruction for suggestion requests.
pub fn suggestion_system_instruction() -> String {
    "You are a meal planning assistant. Respond ONLY with a single JSON document \
     matching the requested schema. No markdown, no commentary."
        .to_string()
}

pub const MEAL_SUGGESTION_SCHEMA: &str = r#"{
  "suggestions": [
    {
      "title": "string",
      "description": "string",
      "cookTimeMinutes": number,
      "requiredIngredients": [ { "name": "string", "quantity": number, "unit": "string" } ],
      "missingIngredients": [ { "name": "string", "quantity": number, "unit": "string" } ],
      "steps": ["string"]
    }
  ]
}"#;

pub const WEEKLY_PLAN_SCHEMA: &str = r#"{
  "weekStart": "string (ISO date)",
  "days": [
    {
      "date": "string (ISO date)",
      "meals": {
        "breakfast": { "title": "string", "description": "string (optional)", "cookTimeMinutes": number (optional) } (optional),
        "lunch": { ... } (optional),
        "dinner": { ... } (optional),
        "snack": { ... } (optional)
      }
    }
  ],
  "prepPlan": ["string"]
}"#;

pub const GROCERY_SUGGESTION_SCHEMA: &str = r#"{
  "items": [
    {
      "name": "string",
      "quantity": number,
      "unit": "string",
      "reason": "string (missing, low_stock, or staple)",
      "priority": number (1=high, 2=medium, 3=low)
    }
  ]
}"#;

fn write_inventory_lines(out: &mut String, items: &[InventoryItem]) {
    for item in items {
        let _ = write!(out, "- {}: {} {} ({})", item.name, item.quantity, item.unit, item.location);
        if let Some(expiry) = item.expiry_date {
            let _ = write!(out, ", expires {}", expiry.format("%Y-%m-%d"));
        }
        out.push('\n');
    }
}

fn write_preferences(out: &mut String, profile: &UserProfile) {
    out.push_str("User preferences:\n");
    if !profile.dietary_preference.is_empty() {
        let _ = writeln!(out, "- Dietary preference: {}", profile.dietary_preference);
    }
    if !profile.allergies.is_empty() {
        let _ = writeln!(out, "- Allergies: {}", profile.allergies.join(", "));
    }
    if !profile.disliked_ingredients.is_empty() {
        let _ = writeln!(out, "- Dislikes: {}", profile.disliked_ingredients.join(", "));
    }
    if !profile.preferred_cuisines.is_empty() {
        let _ = writeln!(out, "- Preferred cuisines: {}", profile.preferred_cuisines.join(", "));
    }
    if let Some(minutes) = profile.max_cook_time_minutes {
        let _ = writeln!(out, "- Max cook time: {minutes} minutes");
    }
    if let Some(calories) = profile.calorie_target {
        let _ = writeln!(out, "- Daily calorie target: {calories}");
    }
    out.push('\n');
}

/// Prompt for meal suggestions from current inventory and preferences.
pub fn meal_suggestion_prompt(inventory: &[InventoryItem], profile: &UserProfile) -> String {
    let mut prompt = String::from(
        "Suggest 3 meals that can be cooked mostly from the inventory below, \
         respecting the user's preferences. Prefer ingredients close to expiry.\n\n",
    );
    write_preferences(&mut prompt, profile);
    let _ = writeln!(prompt, "Inventory ({} items):", inventory.len());
    write_inventory_lines(&mut prompt, inventory);
    prompt
}

/// Prompt for a seven-day meal plan starting at `week_start`.
pub fn weekly_plan_prompt(week_start: NaiveDate, profile: &UserProfile, meals_per_day: u32) -> String {
    let mut prompt = format!(
        "Create a 7-day meal plan starting {week_start}, with {meals_per_day} meals per day.\n\n"
    );
    write_preferences(&mut prompt, profile);
    prompt.push_str("Include a short prep plan for the week.");
    prompt
}

/// Prompt for grocery purchase suggestions from planned meals, current
/// inventory and low-stock items.
pub fn grocery_suggestion_prompt(
    planned_meals: &[PlannedMeal],
    inventory: &[InventoryItem],
    low_stock: &[InventoryItem],
) -> String {
    let mut prompt = String::from(
        "Suggest grocery items to buy so the planned meals below can be cooked. \
         Do not suggest items already in sufficient stock. Mark each item's reason \
         as missing, low_stock or staple.\n\n",
    );
    let _ = writeln!(prompt, "Planned meals ({}):", planned_meals.len());
    for meal in planned_meals {
        let _ = writeln!(prompt, "- {}: {} - {}", meal.date, meal.meal_type, meal.title);
    }
    prompt.push('\n');
    let _ = writeln!(prompt, "Current inventory ({} items):", inventory.len());
    write_inventory_lines(&mut prompt, inventory);
    prompt.push('\n');
    let _ = writeln!(prompt, "Low stock items ({}):", low_stock.len());
    write_inventory_lines(&mut prompt, low_stock);
    prompt
}
