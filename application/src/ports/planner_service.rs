//! Planner Domain Service port.

use async_trait::async_trait;
use chrono::NaiveDate;
use larder_domain::{DomainError, MealType, PlannedMeal};

/// Port over planned meals.
#[async_trait]
pub trait PlannerService: Send + Sync {
    async fn create_planned_meal(
        &self,
        date: NaiveDate,
        meal_type: MealType,
        title: String,
        dish_id: Option<String>,
        ingredient_names: Vec<String>,
    ) -> Result<PlannedMeal, DomainError>;

    /// Fetch meals planned within `[from, to]`, inclusive.
    async fn fetch_planned_meals(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PlannedMeal>, DomainError>;
}
