//! Console formatting for transcripts and suggestion payloads

use larder_domain::suggestion::{GroceryItemSuggestion, MealSuggestion, WeeklyMealPlan};
use larder_domain::{ChatMessage, MessageRole};

/// Format one transcript message with a role prefix.
pub fn format_message(message: &ChatMessage) -> String {
    let prefix = match message.role {
        MessageRole::User => "you",
        MessageRole::Assistant => "larder",
        MessageRole::System => "system",
    };
    format!("{prefix}> {}", message.content)
}

pub fn format_meal_suggestions(suggestions: &[MealSuggestion]) -> String {
    if suggestions.is_empty() {
        return "No meal suggestions right now.".to_string();
    }
    let mut out = String::new();
    for (i, meal) in suggestions.iter().enumerate() {
        out.push_str(&format!("{}. {}", i + 1, meal.title));
        if meal.cook_time_minutes > 0 {
            out.push_str(&format!(" ({} min)", meal.cook_time_minutes));
        }
        out.push('\n');
        if !meal.description.is_empty() {
            out.push_str(&format!("   {}\n", meal.description));
        }
        if !meal.missing_ingredients.is_empty() {
            let missing: Vec<String> = meal
                .missing_ingredients
                .iter()
                .map(|ing| format!("{} {} {}", ing.quantity, ing.unit, ing.name))
                .collect();
            out.push_str(&format!("   missing: {}\n", missing.join(", ")));
        }
    }
    out.trim_end().to_string()
}

pub fn format_weekly_plan(plan: &WeeklyMealPlan) -> String {
    let mut out = format!("Week of {}\n", plan.week_start);
    for day in &plan.days {
        out.push_str(&format!("{}\n", day.date));
        let slots = [
            ("breakfast", &day.meals.breakfast),
            ("lunch", &day.meals.lunch),
            ("dinner", &day.meals.dinner),
            ("snack", &day.meals.snack),
        ];
        for (slot, idea) in slots {
            if let Some(idea) = idea {
                out.push_str(&format!("  {slot}: {}\n", idea.title));
            }
        }
    }
    if !plan.prep_plan.is_empty() {
        out.push_str("Prep ahead:\n");
        for step in &plan.prep_plan {
            out.push_str(&format!("  - {step}\n"));
        }
    }
    out.trim_end().to_string()
}

pub fn format_grocery_suggestions(items: &[GroceryItemSuggestion]) -> String {
    if items.is_empty() {
        return "Nothing to buy, the pantry covers everything planned.".to_string();
    }
    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "- {} {} {} ({})\n",
            item.quantity, item.unit, item.name, item.reason
        ));
    }
    out.trim_end().to_string()
}
