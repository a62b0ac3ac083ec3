//! Prompt construction for the conversational assistant.
//!
//! Pure string builders over domain snapshots. Prompts are assembled here
//! so every caller embeds the same envelope contract and context layout.

use crate::assistant::ToolResult;
use crate::grocery::GroceryList;
use crate::inventory::InventoryItem;
use crate::planner::PlannedMeal;
use crate::profile::UserProfile;
use std::fmt::Write;

const INVENTORY_PREVIEW: usize = 10;
const MEALS_PREVIEW: usize = 7;
const GROCERY_PREVIEW: usize = 3;

/// Schema description for the assistant envelope, embedded in guard prompts.
pub const ENVELOPE_SCHEMA: &str = r#"One of:
{ "type": "message", "content": "string" }
or
{ "type": "toolCall", "tool": "string", "args": { ... }, "requestId": "string (unique)", "confirmationRequired": boolean (optional), "confirmationMessage": "string (optional)" }"#;

/// System instruction for every assistant turn: the envelope contract and
/// the catalog of invokable tools.
pub fn system_instruction() -> String {
    r#"You are a helpful meal planning assistant. You help users manage their pantry, plan meals, and generate grocery lists.

IMPORTANT: You must respond ONLY using one of these JSON envelope formats:

1. Plain message (when no action is needed):
{ "type": "message", "content": "Your response text here" }

2. Tool call (when the user requests an action):
{ "type": "toolCall", "tool": "toolName", "args": { ... }, "requestId": "unique-string", "confirmationRequired": false, "confirmationMessage": "optional message" }

RULES:
- Always use the envelope format. Never respond with plain text or markdown.
- For toolCall, requestId must be a unique string.
- Only use toolCall when the user explicitly requests an action.
- If an itemId is required but not provided, ask a clarifying question using a message envelope.
- Set confirmationRequired: true for potentially large or important changes.

AVAILABLE TOOLS:

1. addInventoryItem
Adds an item to inventory.
Args: { name: string, category?: string, quantity: number, unit: string, location: "pantry"|"fridge"|"freezer", expiryDate?: "YYYY-MM-DD" }

2. updateInventoryQuantity
Updates an inventory item's quantity.
Args: { itemId: string, delta: number (positive to add, negative to subtract) }

3. createPlannedMeal
Creates a planned meal.
Args: { date: "YYYY-MM-DD", mealType: "breakfast"|"lunch"|"dinner"|"snack", title?: string, dishId?: string }
Note: either title or dishId must be provided.

4. generateGroceryList
Generates a grocery list.
Args: { daysAhead: number (1-14), includePlannedMeals: boolean, includeLowStock: boolean }

5. logCookedDish
Logs a cooked dish and decrements inventory.
Args: { name: string, servings: number, dateCooked: "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SS", ingredientsUsed: [{ inventoryItemId: string, quantity: number, unit: string }] }

SAFETY:
- Never invent itemIds or dishIds. Ask if missing.
- Use confirmationRequired for important changes."#
        .to_string()
}

/// Build the per-turn context prompt: domain snapshots followed by the
/// user's literal message. Previews are capped so the prompt stays small.
pub fn context_prompt(
    profile: Option<&UserProfile>,
    inventory: &[InventoryItem],
    planned_meals: &[PlannedMeal],
    grocery_list: Option<&GroceryList>,
    user_message: &str,
) -> String {
    let mut context = String::from("Current app context:\n\n");

    if let Some(profile) = profile {
        context.push_str("User preferences:\n");
        if !profile.dietary_preference.is_empty() {
            let _ = writeln!(context, "- Dietary preference: {}", profile.dietary_preference);
        }
        if !profile.allergies.is_empty() {
            let _ = writeln!(context, "- Allergies: {}", profile.allergies.join(", "));
        }
        context.push('\n');
    }

    if !inventory.is_empty() {
        let _ = writeln!(context, "Current inventory ({} items):", inventory.len());
        for item in inventory.iter().take(INVENTORY_PREVIEW) {
            let _ = write!(
                context,
                "- {} [{}]: {} {} ({})",
                item.name, item.id, item.quantity, item.unit, item.location
            );
            if let Some(expiry) = item.expiry_date {
                let _ = write!(context, ", expires: {}", expiry.format("%Y-%m-%d"));
            }
            context.push('\n');
        }
        if inventory.len() > INVENTORY_PREVIEW {
            let _ = writeln!(context, "... and {} more items", inventory.len() - INVENTORY_PREVIEW);
        }
        context.push('\n');
    }

    if !planned_meals.is_empty() {
        context.push_str("Planned meals this week:\n");
        for meal in planned_meals.iter().take(MEALS_PREVIEW) {
            let _ = writeln!(context, "- {}: {} - {}", meal.date, meal.meal_type, meal.title);
        }
        context.push('\n');
    }

    if let Some(list) = grocery_list {
        let _ = write!(context, "Active grocery list: {} items", list.items.len());
        if !list.items.is_empty() {
            let names: Vec<&str> = list
                .items
                .iter()
                .take(GROCERY_PREVIEW)
                .map(|i| i.name.as_str())
                .collect();
            let _ = write!(context, " (top items: {})", names.join(", "));
        }
        context.push_str("\n\n");
    }

    let _ = write!(context, "User message:\n{user_message}");
    context
}

/// Build the follow-up prompt asking the model to explain a tool result.
/// Constrained by instruction to the message envelope shape.
pub fn tool_result_prompt(result: &ToolResult) -> String {
    let result_json =
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string());
    format!(
        r#"A tool was executed with the following result:

{result_json}

Please respond with a user-friendly message explaining what happened. Use the message envelope format:
{{ "type": "message", "content": "Your explanation here" }}

If the tool succeeded, confirm the action in a friendly way.
If the tool failed, explain the error clearly and suggest what the user can do."#
    )
}
