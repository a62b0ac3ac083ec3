//! Port definitions (interfaces to the infrastructure layer)

pub mod conversation_logger;
pub mod dish_log_service;
pub mod grocery_service;
pub mod inventory_service;
pub mod model_client;
pub mod planner_service;
