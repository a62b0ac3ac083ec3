//! Tool Registry
//!
//! The single authority for "is this a known tool, and are these arguments
//! well-formed for it". Validation is pure (no I/O, no mutation) and runs
//! both pre-confirmation and again, defensively, at execution time before
//! dispatching to the bound executor.

use crate::tools::context::ToolExecutionContext;
use crate::tools::executors::{
    AddInventoryItemExecutor, CreatePlannedMealExecutor, GenerateGroceryListExecutor,
    LogCookedDishExecutor, ToolExecutionError, ToolExecutor, ToolPayload,
    UpdateInventoryQuantityExecutor,
};
use larder_domain::tool::{ToolArgs, ToolCallError, ToolName, validate_args};
use std::collections::HashMap;
use std::str::FromStr;

pub struct ToolRegistry {
    executors: HashMap<ToolName, Box<dyn ToolExecutor>>,
}

impl ToolRegistry {
    /// Registry with every tool in the closed set bound to its executor.
    pub fn with_default_executors() -> Self {
        let executors: Vec<Box<dyn ToolExecutor>> = vec![
            Box::new(AddInventoryItemExecutor),
            Box::new(UpdateInventoryQuantityExecutor),
            Box::new(CreatePlannedMealExecutor),
            Box::new(GenerateGroceryListExecutor),
            Box::new(LogCookedDishExecutor),
        ];
        Self {
            executors: executors.into_iter().map(|e| (e.tool(), e)).collect(),
        }
    }

    /// Registry with explicit bindings, for tests and partial wiring.
    pub fn new(executors: Vec<Box<dyn ToolExecutor>>) -> Self {
        Self {
            executors: executors.into_iter().map(|e| (e.tool(), e)).collect(),
        }
    }

    /// Check a proposed tool call without executing anything.
    ///
    /// Resolves the name against the closed set, decodes the argument bag
    /// into the tool's typed schema, and runs the schema's predicate.
    pub fn validate(&self, tool: &str, args: &ToolArgs) -> Result<ToolName, ToolCallError> {
        let tool = ToolName::from_str(tool)?;
        validate_args(tool, args)?;
        Ok(tool)
    }

    /// Re-validate and dispatch to the bound executor.
    pub async fn execute(
        &self,
        tool: &str,
        args: &ToolArgs,
        ctx: &ToolExecutionContext,
    ) -> Result<ToolPayload, ToolExecutionError> {
        // Defensive: never trust that validate() already ran.
        let tool = self.validate(tool, args)?;
        let executor = self
            .executors
            .get(&tool)
            .ok_or(ToolExecutionError::ExecutorMissing(tool))?;
        tracing::debug!(tool = %tool, "dispatching tool call");
        executor.execute(args, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::dish_log_service::DishLogService;
    use crate::ports::grocery_service::GroceryService;
    use crate::ports::inventory_service::{InventoryService, NewInventoryItem};
    use crate::ports::planner_service::PlannerService;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use larder_domain::{
        Dish, DomainError, GroceryList, IngredientDraft, InventoryItem, MealType, PlannedMeal,
        StorageLocation,
    };
    use std::sync::{Arc, Mutex};

    struct StubInventory {
        items: Mutex<Vec<InventoryItem>>,
    }

    impl StubInventory {
        fn with_items(items: Vec<InventoryItem>) -> Arc<Self> {
            Arc::new(Self {
                items: Mutex::new(items),
            })
        }
    }

    fn item(id: &str, name: &str, quantity: f64, unit: &str) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: name.to_string(),
            category: "test".to_string(),
            quantity,
            unit: unit.to_string(),
            location: StorageLocation::Pantry,
            purchase_date: Utc::now(),
            expiry_date: None,
            low_stock_threshold: 0.0,
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl InventoryService for StubInventory {
        async fn create_item(&self, new: NewInventoryItem) -> Result<InventoryItem, DomainError> {
            let created = InventoryItem {
                id: format!("item-{}", self.items.lock().unwrap().len() + 1),
                name: new.name,
                category: new.category,
                quantity: new.quantity,
                unit: new.unit,
                location: new.location,
                purchase_date: new.purchase_date,
                expiry_date: new.expiry_date,
                low_stock_threshold: new.low_stock_threshold,
                updated_at: Utc::now(),
            };
            self.items.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update_quantity(
            &self,
            item_id: &str,
            delta: f64,
        ) -> Result<InventoryItem, DomainError> {
            let mut items = self.items.lock().unwrap();
            let item = items
                .iter_mut()
                .find(|i| i.id == item_id)
                .ok_or_else(|| DomainError::ItemNotFound(item_id.to_string()))?;
            item.quantity += delta;
            Ok(item.clone())
        }

        async fn consume_item(
            &self,
            _item_id: &str,
            _amount: f64,
            _unit: &str,
        ) -> Result<(), DomainError> {
            unimplemented!("not exercised in registry tests")
        }

        async fn fetch_all_items(&self) -> Result<Vec<InventoryItem>, DomainError> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn delete_item(&self, _item_id: &str) -> Result<(), DomainError> {
            unimplemented!("not exercised in registry tests")
        }

        async fn fetch_low_stock_items(&self) -> Result<Vec<InventoryItem>, DomainError> {
            Ok(Vec::new())
        }

        async fn fetch_expiring_soon_items(
            &self,
            _days_ahead: u32,
        ) -> Result<Vec<InventoryItem>, DomainError> {
            Ok(Vec::new())
        }
    }

    struct StubPlanner;

    #[async_trait]
    impl PlannerService for StubPlanner {
        async fn create_planned_meal(
            &self,
            date: NaiveDate,
            meal_type: MealType,
            title: String,
            dish_id: Option<String>,
            ingredient_names: Vec<String>,
        ) -> Result<PlannedMeal, DomainError> {
            Ok(PlannedMeal {
                id: "meal-1".to_string(),
                date,
                meal_type,
                title,
                dish_id,
                ingredient_names,
            })
        }

        async fn fetch_planned_meals(
            &self,
            _from: NaiveDate,
            _to: NaiveDate,
        ) -> Result<Vec<PlannedMeal>, DomainError> {
            Ok(Vec::new())
        }
    }

    struct StubGrocery;

    #[async_trait]
    impl GroceryService for StubGrocery {
        async fn generate_grocery_list(
            &self,
            days_ahead: u32,
            _include_planned_meals: bool,
            _include_low_stock: bool,
        ) -> Result<GroceryList, DomainError> {
            Ok(GroceryList {
                id: "list-1".to_string(),
                created_at: Utc::now(),
                days_ahead,
                items: Vec::new(),
            })
        }

        async fn create_grocery_list(&self, _days_ahead: u32) -> Result<GroceryList, DomainError> {
            unimplemented!("not exercised in registry tests")
        }

        async fn add_item_to_list(
            &self,
            _list_id: &str,
            _name: String,
            _quantity: f64,
            _unit: String,
            _reason: String,
            _priority: u8,
        ) -> Result<GroceryList, DomainError> {
            unimplemented!("not exercised in registry tests")
        }

        async fn fetch_active_list(&self) -> Result<Option<GroceryList>, DomainError> {
            Ok(None)
        }
    }

    struct StubDishLog;

    #[async_trait]
    impl DishLogService for StubDishLog {
        async fn log_dish(
            &self,
            name: String,
            servings: u32,
            date_cooked: chrono::DateTime<Utc>,
            steps: Option<String>,
            ingredients: Vec<IngredientDraft>,
        ) -> Result<Dish, DomainError> {
            Ok(Dish {
                id: "dish-1".to_string(),
                name,
                servings,
                date_cooked,
                steps,
                ingredients: ingredients
                    .into_iter()
                    .map(|d| larder_domain::DishIngredient {
                        inventory_item_id: d.inventory_item_id,
                        name: d.name,
                        amount_used: d.amount,
                        unit: d.unit,
                    })
                    .collect(),
                updated_at: Utc::now(),
            })
        }

        async fn fetch_all_dishes(&self) -> Result<Vec<Dish>, DomainError> {
            Ok(Vec::new())
        }

        async fn delete_dish(&self, _dish_id: &str) -> Result<(), DomainError> {
            unimplemented!("not exercised in registry tests")
        }
    }

    fn context(inventory: Arc<StubInventory>) -> ToolExecutionContext {
        ToolExecutionContext::new(
            inventory,
            Arc::new(StubPlanner),
            Arc::new(StubGrocery),
            Arc::new(StubDishLog),
            None,
        )
    }

    fn args(json: serde_json::Value) -> ToolArgs {
        match json {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_validate_rejects_unregistered_names() {
        let registry = ToolRegistry::with_default_executors();
        for name in ["dropTables", "addInventory", "logcookeddish", ""] {
            assert!(matches!(
                registry.validate(name, &ToolArgs::new()),
                Err(ToolCallError::UnknownTool(_))
            ));
        }
    }

    #[test]
    fn test_validate_accepts_every_registered_tool() {
        let registry = ToolRegistry::with_default_executors();
        let cases = [
            (
                "addInventoryItem",
                serde_json::json!({ "name": "Milk", "quantity": 1.0, "unit": "L", "location": "fridge" }),
            ),
            (
                "updateInventoryQuantity",
                serde_json::json!({ "itemId": "i1", "delta": -2.0 }),
            ),
            (
                "createPlannedMeal",
                serde_json::json!({ "date": "2025-03-10", "mealType": "dinner", "title": "Pasta" }),
            ),
            ("generateGroceryList", serde_json::json!({ "daysAhead": 7 })),
            (
                "logCookedDish",
                serde_json::json!({
                    "name": "Stew", "servings": 4, "dateCooked": "2025-03-10",
                    "ingredientsUsed": [{ "inventoryItemId": "i1", "quantity": 1.0, "unit": "kg" }]
                }),
            ),
        ];
        for (name, json) in cases {
            registry.validate(name, &args(json)).unwrap();
        }
    }

    #[tokio::test]
    async fn test_execute_revalidates_defensively() {
        let registry = ToolRegistry::with_default_executors();
        let ctx = context(StubInventory::with_items(vec![]));
        let bad = args(serde_json::json!({ "itemId": "i1", "delta": 0.0 }));
        let err = registry
            .execute("updateInventoryQuantity", &bad, &ctx)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ToolExecutionError::Validation(ToolCallError::InvalidArgument { .. })
        ));
    }

    #[tokio::test]
    async fn test_executor_missing_is_a_configuration_error() {
        // Known tool name, but nothing bound.
        let registry = ToolRegistry::new(vec![Box::new(AddInventoryItemExecutor)]);
        let ctx = context(StubInventory::with_items(vec![]));
        let good = args(serde_json::json!({ "daysAhead": 7 }));
        let err = registry
            .execute("generateGroceryList", &good, &ctx)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ToolExecutionError::ExecutorMissing(ToolName::GenerateGroceryList)
        ));
    }

    #[tokio::test]
    async fn test_update_quantity_executes_against_inventory() {
        let registry = ToolRegistry::with_default_executors();
        let inventory = StubInventory::with_items(vec![item("i1", "Rice", 500.0, "g")]);
        let ctx = context(Arc::clone(&inventory));
        let payload = registry
            .execute(
                "updateInventoryQuantity",
                &args(serde_json::json!({ "itemId": "i1", "delta": -100.0 })),
                &ctx,
            )
            .await
            .unwrap();
        assert_eq!(payload["oldQuantity"], serde_json::json!(500.0));
        assert_eq!(payload["newQuantity"], serde_json::json!(400.0));
    }

    #[tokio::test]
    async fn test_update_quantity_unknown_item_fails() {
        let registry = ToolRegistry::with_default_executors();
        let ctx = context(StubInventory::with_items(vec![]));
        let err = registry
            .execute(
                "updateInventoryQuantity",
                &args(serde_json::json!({ "itemId": "ghost", "delta": 1.0 })),
                &ctx,
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ToolExecutionError::Domain(DomainError::ItemNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_quantity_negative_result_rejected_without_mutation() {
        let registry = ToolRegistry::with_default_executors();
        let inventory = StubInventory::with_items(vec![item("i1", "Rice", 100.0, "g")]);
        let ctx = context(Arc::clone(&inventory));
        let err = registry
            .execute(
                "updateInventoryQuantity",
                &args(serde_json::json!({ "itemId": "i1", "delta": -200.0 })),
                &ctx,
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ToolExecutionError::Domain(DomainError::InsufficientInventory { .. })
        ));
        let items = inventory.fetch_all_items().await.unwrap();
        assert_eq!(items[0].quantity, 100.0);
    }

    #[tokio::test]
    async fn test_log_cooked_dish_prechecks_sufficiency() {
        let registry = ToolRegistry::with_default_executors();
        let inventory = StubInventory::with_items(vec![item("i1", "Rice", 100.0, "g")]);
        let ctx = context(Arc::clone(&inventory));
        let err = registry
            .execute(
                "logCookedDish",
                &args(serde_json::json!({
                    "name": "Fried rice", "servings": 2, "dateCooked": "2025-03-10",
                    "ingredientsUsed": [{ "inventoryItemId": "i1", "quantity": 300.0, "unit": "g" }]
                })),
                &ctx,
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ToolExecutionError::Domain(DomainError::InsufficientInventory { .. })
        ));
    }

    #[tokio::test]
    async fn test_log_cooked_dish_unresolved_id_becomes_free_form_ingredient() {
        let registry = ToolRegistry::with_default_executors();
        let ctx = context(StubInventory::with_items(vec![]));
        let payload = registry
            .execute(
                "logCookedDish",
                &args(serde_json::json!({
                    "name": "Salad", "servings": 1, "dateCooked": "2025-03-10",
                    "ingredientsUsed": [{ "inventoryItemId": "not-in-inventory", "quantity": 1.0, "unit": "pcs" }]
                })),
                &ctx,
            )
            .await
            .unwrap();
        assert_eq!(payload["name"], serde_json::json!("Salad"));
    }

    #[tokio::test]
    async fn test_create_planned_meal_without_dish_uses_title() {
        let registry = ToolRegistry::with_default_executors();
        let ctx = context(StubInventory::with_items(vec![]));
        let payload = registry
            .execute(
                "createPlannedMeal",
                &args(serde_json::json!({
                    "date": "2025-03-12", "mealType": "lunch", "title": "Soup", "dishId": "missing"
                })),
                &ctx,
            )
            .await
            .unwrap();
        // Unresolved dishId is not an error for this tool.
        assert_eq!(payload["title"], serde_json::json!("Soup"));
        assert_eq!(payload["mealType"], serde_json::json!("lunch"));
    }

    #[tokio::test]
    async fn test_add_inventory_item_defaults_category() {
        let registry = ToolRegistry::with_default_executors();
        let inventory = StubInventory::with_items(vec![]);
        let ctx = context(Arc::clone(&inventory));
        registry
            .execute(
                "addInventoryItem",
                &args(serde_json::json!({
                    "name": "Milk", "quantity": 1.0, "unit": "L", "location": "Fridge"
                })),
                &ctx,
            )
            .await
            .unwrap();
        let items = inventory.fetch_all_items().await.unwrap();
        assert_eq!(items[0].category, "uncategorized");
        assert_eq!(items[0].location, StorageLocation::Fridge);
    }
}
