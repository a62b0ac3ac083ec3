//! In-memory data store implementing the four Domain Service ports.
//!
//! One `RwLock` guards all entity tables, so every service call is
//! serialized against every other. The atomic dish-log path relies on
//! this: validate-all-then-apply-all runs under a single write guard,
//! and no concurrent mutation can interleave with it.

mod dish_log;
mod grocery;
mod inventory;
mod planner;
pub mod seed;

use larder_domain::{Dish, GroceryList, InventoryItem, PlannedMeal};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
pub(crate) struct StoreState {
    pub items: Vec<InventoryItem>,
    pub dishes: Vec<Dish>,
    pub meals: Vec<PlannedMeal>,
    pub lists: Vec<GroceryList>,
}

/// Process-local store. Entities get stable UUID string ids on creation
/// and are looked up only by those ids.
#[derive(Default)]
pub struct MemoryStore {
    pub(crate) state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    // Lock poisoning only happens after a panic mid-mutation; recover the
    // guard rather than cascading the panic.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(|p| p.into_inner())
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(|p| p.into_inner())
    }
}
