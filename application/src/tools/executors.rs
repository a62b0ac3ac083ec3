//! Tool executors: one per tool in the closed set.
//!
//! Each executor re-decodes and re-validates its own arguments before
//! touching any Domain Service, translates the validated arguments into
//! service calls, and returns a small JSON payload for the follow-up
//! explanation turn. Executors never partially apply effects on the
//! error path.

use crate::tools::context::ToolExecutionContext;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use larder_domain::tool::{
    AddInventoryItemArgs, CreatePlannedMealArgs, GenerateGroceryListArgs, LogCookedDishArgs,
    ToolArgs, ToolCallError, ToolName, UpdateInventoryQuantityArgs,
};
use larder_domain::{DomainError, IngredientDraft, MealType, StorageLocation};
use serde_json::{Map, Value, json};
use std::str::FromStr;
use thiserror::Error;

use crate::ports::inventory_service::NewInventoryItem;

/// Why a tool execution failed.
#[derive(Error, Debug)]
pub enum ToolExecutionError {
    /// Pre-execution argument rejection; user-facing and recoverable.
    #[error(transparent)]
    Validation(#[from] ToolCallError),

    /// A Domain Service refused the operation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No executor bound for a known tool name. A wiring bug, not a user
    /// error; fatal to the request but never to the process.
    #[error("No executor bound for tool: {0}")]
    ExecutorMissing(ToolName),
}

pub type ToolPayload = Map<String, Value>;

/// One tool's behavior: validated args in, result payload out.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    fn tool(&self) -> ToolName;

    async fn execute(
        &self,
        args: &ToolArgs,
        ctx: &ToolExecutionContext,
    ) -> Result<ToolPayload, ToolExecutionError>;
}

fn payload(value: Value) -> ToolPayload {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn parse_date(field: &str, text: &str) -> Result<NaiveDate, ToolCallError> {
    NaiveDate::from_str(text)
        .map_err(|_| ToolCallError::invalid_argument(field, "Expected an ISO date (YYYY-MM-DD)"))
}

/// Accept both `YYYY-MM-DDTHH:MM:SS` and plain `YYYY-MM-DD` (midnight).
fn parse_date_or_datetime(field: &str, text: &str) -> Result<DateTime<Utc>, ToolCallError> {
    if let Ok(dt) = NaiveDateTime::from_str(text) {
        return Ok(dt.and_utc());
    }
    parse_date(field, text).map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

// ---------------------------------------------------------------------------
// addInventoryItem

pub struct AddInventoryItemExecutor;

#[async_trait]
impl ToolExecutor for AddInventoryItemExecutor {
    fn tool(&self) -> ToolName {
        ToolName::AddInventoryItem
    }

    async fn execute(
        &self,
        args: &ToolArgs,
        ctx: &ToolExecutionContext,
    ) -> Result<ToolPayload, ToolExecutionError> {
        let args = AddInventoryItemArgs::decode(args)?;
        args.validate()?;

        let location = StorageLocation::parse(&args.location)?;
        let expiry_date = args
            .expiry_date
            .as_deref()
            .map(|text| parse_date("expiryDate", text))
            .transpose()?
            .map(|date| date.and_time(NaiveTime::MIN).and_utc());

        let item = ctx
            .inventory
            .create_item(NewInventoryItem {
                name: args.name.trim().to_string(),
                category: args
                    .category
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| "uncategorized".to_string()),
                quantity: args.quantity,
                unit: args.unit.trim().to_string(),
                location,
                purchase_date: Utc::now(),
                expiry_date,
                low_stock_threshold: 0.0,
            })
            .await?;

        tracing::info!(item_id = %item.id, name = %item.name, "inventory item added");
        Ok(payload(json!({
            "itemId": item.id,
            "name": item.name,
            "quantity": item.quantity,
            "unit": item.unit,
            "location": item.location.as_str(),
        })))
    }
}

// ---------------------------------------------------------------------------
// updateInventoryQuantity

pub struct UpdateInventoryQuantityExecutor;

#[async_trait]
impl ToolExecutor for UpdateInventoryQuantityExecutor {
    fn tool(&self) -> ToolName {
        ToolName::UpdateInventoryQuantity
    }

    async fn execute(
        &self,
        args: &ToolArgs,
        ctx: &ToolExecutionContext,
    ) -> Result<ToolPayload, ToolExecutionError> {
        let args = UpdateInventoryQuantityArgs::decode(args)?;
        args.validate()?;

        let items = ctx.inventory.fetch_all_items().await?;
        let item = items
            .iter()
            .find(|item| item.id == args.item_id)
            .ok_or_else(|| DomainError::ItemNotFound(args.item_id.clone()))?;

        let old_quantity = item.quantity;
        let new_quantity = old_quantity + args.delta;
        if new_quantity < 0.0 {
            return Err(DomainError::InsufficientInventory {
                item_name: item.name.clone(),
                available: old_quantity,
                requested: args.delta.abs(),
            }
            .into());
        }

        let updated = ctx.inventory.update_quantity(&item.id, args.delta).await?;
        tracing::info!(item_id = %updated.id, old_quantity, new_quantity = updated.quantity, "inventory quantity updated");
        Ok(payload(json!({
            "itemId": updated.id,
            "name": updated.name,
            "oldQuantity": old_quantity,
            "newQuantity": updated.quantity,
            "unit": updated.unit,
        })))
    }
}

// ---------------------------------------------------------------------------
// createPlannedMeal

pub struct CreatePlannedMealExecutor;

#[async_trait]
impl ToolExecutor for CreatePlannedMealExecutor {
    fn tool(&self) -> ToolName {
        ToolName::CreatePlannedMeal
    }

    async fn execute(
        &self,
        args: &ToolArgs,
        ctx: &ToolExecutionContext,
    ) -> Result<ToolPayload, ToolExecutionError> {
        let args = CreatePlannedMealArgs::decode(args)?;
        args.validate()?;

        let date = parse_date("date", &args.date)?;
        let meal_type = MealType::parse(&args.meal_type)?;

        // Dish lookup failure is not an error for this tool: the meal is
        // simply created dish-less.
        let dish = match args.dish_id.as_deref().filter(|id| !id.trim().is_empty()) {
            Some(dish_id) => {
                let dishes = ctx.dish_log.fetch_all_dishes().await?;
                dishes.into_iter().find(|dish| dish.id == dish_id)
            }
            None => None,
        };

        let title = args
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| dish.as_ref().map(|d| d.name.clone()))
            .unwrap_or_else(|| "Untitled meal".to_string());

        let ingredient_names = dish
            .as_ref()
            .map(|d| {
                d.ingredients
                    .iter()
                    .filter_map(|i| i.name.clone())
                    .collect()
            })
            .unwrap_or_default();

        let meal = ctx
            .planner
            .create_planned_meal(
                date,
                meal_type,
                title,
                dish.map(|d| d.id),
                ingredient_names,
            )
            .await?;

        tracing::info!(meal_id = %meal.id, date = %meal.date, "planned meal created");
        Ok(payload(json!({
            "mealId": meal.id,
            "date": meal.date.to_string(),
            "mealType": meal.meal_type.as_str(),
            "title": meal.title,
        })))
    }
}

// ---------------------------------------------------------------------------
// generateGroceryList

const PREVIEW_ITEMS: usize = 5;

pub struct GenerateGroceryListExecutor;

#[async_trait]
impl ToolExecutor for GenerateGroceryListExecutor {
    fn tool(&self) -> ToolName {
        ToolName::GenerateGroceryList
    }

    async fn execute(
        &self,
        args: &ToolArgs,
        ctx: &ToolExecutionContext,
    ) -> Result<ToolPayload, ToolExecutionError> {
        let args = GenerateGroceryListArgs::decode(args)?;
        args.validate()?;

        let list = ctx
            .grocery
            .generate_grocery_list(
                args.days_ahead as u32,
                args.include_planned_meals,
                args.include_low_stock,
            )
            .await?;

        let preview: Vec<Value> = list
            .items
            .iter()
            .take(PREVIEW_ITEMS)
            .map(|item| {
                json!({
                    "name": item.name,
                    "quantity": item.quantity,
                    "unit": item.unit,
                })
            })
            .collect();

        tracing::info!(list_id = %list.id, item_count = list.items.len(), "grocery list generated");
        Ok(payload(json!({
            "listId": list.id,
            "itemCount": list.items.len(),
            "previewItems": preview,
        })))
    }
}

// ---------------------------------------------------------------------------
// logCookedDish

pub struct LogCookedDishExecutor;

#[async_trait]
impl ToolExecutor for LogCookedDishExecutor {
    fn tool(&self) -> ToolName {
        ToolName::LogCookedDish
    }

    async fn execute(
        &self,
        args: &ToolArgs,
        ctx: &ToolExecutionContext,
    ) -> Result<ToolPayload, ToolExecutionError> {
        let args = LogCookedDishArgs::decode(args)?;
        args.validate()?;

        let date_cooked = parse_date_or_datetime("dateCooked", &args.date_cooked)?;

        // Resolve ingredient references up front and pre-check every
        // decrement, so a hopeless call never reaches the store.
        // Unresolved ids become non-inventory ingredients, not errors.
        let items = ctx.inventory.fetch_all_items().await?;
        let mut drafts = Vec::with_capacity(args.ingredients_used.len());
        for usage in &args.ingredients_used {
            match items.iter().find(|item| item.id == usage.inventory_item_id) {
                Some(item) => {
                    if item.quantity < usage.quantity {
                        return Err(DomainError::InsufficientInventory {
                            item_name: item.name.clone(),
                            available: item.quantity,
                            requested: usage.quantity,
                        }
                        .into());
                    }
                    drafts.push(IngredientDraft::from_inventory(
                        item.id.clone(),
                        usage.quantity,
                        usage.unit.clone(),
                    ));
                }
                None => {
                    drafts.push(IngredientDraft::free_form(
                        usage.inventory_item_id.clone(),
                        usage.quantity,
                        usage.unit.clone(),
                    ));
                }
            }
        }

        let dish = ctx
            .dish_log
            .log_dish(
                args.name.trim().to_string(),
                args.servings as u32,
                date_cooked,
                None,
                drafts,
            )
            .await?;

        tracing::info!(dish_id = %dish.id, name = %dish.name, "dish logged");
        Ok(payload(json!({
            "dishId": dish.id,
            "name": dish.name,
            "servings": dish.servings,
            "dateCooked": dish.date_cooked.to_rfc3339(),
        })))
    }
}
