//! Execution context handed to every tool executor.

use crate::ports::dish_log_service::DishLogService;
use crate::ports::grocery_service::GroceryService;
use crate::ports::inventory_service::InventoryService;
use crate::ports::planner_service::PlannerService;
use larder_domain::UserProfile;
use std::sync::Arc;

/// Read-mostly bundle of Domain Service handles plus the current profile.
///
/// Built once per turn; executors never mutate it and reach domain data
/// only through the service handles.
#[derive(Clone)]
pub struct ToolExecutionContext {
    pub inventory: Arc<dyn InventoryService>,
    pub planner: Arc<dyn PlannerService>,
    pub grocery: Arc<dyn GroceryService>,
    pub dish_log: Arc<dyn DishLogService>,
    pub profile: Option<UserProfile>,
}

impl ToolExecutionContext {
    pub fn new(
        inventory: Arc<dyn InventoryService>,
        planner: Arc<dyn PlannerService>,
        grocery: Arc<dyn GroceryService>,
        dish_log: Arc<dyn DishLogService>,
        profile: Option<UserProfile>,
    ) -> Self {
        Self {
            inventory,
            planner,
            grocery,
            dish_log,
            profile,
        }
    }
}
