//! AI suggestion flows: meal ideas, weekly plans, grocery suggestions.
//!
//! Larger structured-output payloads than the assistant envelope, behind a
//! small per-session request budget (cooldown between requests plus a hard
//! session cap).

use crate::config::AssistantLimits;
use crate::guard::{GuardError, StructuredOutputGuard};
use chrono::NaiveDate;
use larder_domain::prompt::suggestion::{
    GROCERY_SUGGESTION_SCHEMA, MEAL_SUGGESTION_SCHEMA, WEEKLY_PLAN_SCHEMA,
    grocery_suggestion_prompt, meal_suggestion_prompt, suggestion_system_instruction,
    weekly_plan_prompt,
};
use larder_domain::{
    GroceryItemSuggestion, GrocerySuggestionResponse, InventoryItem, MealSuggestion,
    MealSuggestionResponse, PlannedMeal, UserProfile, WeeklyMealPlan,
};
use std::sync::Mutex;
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("Too many suggestion requests, try again in a moment")]
    RateLimited,

    #[error(transparent)]
    Guard(#[from] GuardError),
}

struct RequestBudget {
    last_request: Option<Instant>,
    request_count: u32,
}

pub struct SuggestionService {
    guard: StructuredOutputGuard,
    limits: AssistantLimits,
    budget: Mutex<RequestBudget>,
}

impl SuggestionService {
    pub fn new(guard: StructuredOutputGuard, limits: AssistantLimits) -> Self {
        Self {
            guard,
            limits,
            budget: Mutex::new(RequestBudget {
                last_request: None,
                request_count: 0,
            }),
        }
    }

    /// Suggest meals cookable mostly from the given inventory.
    pub async fn suggest_meals(
        &self,
        inventory: &[InventoryItem],
        profile: &UserProfile,
    ) -> Result<Vec<MealSuggestion>, SuggestionError> {
        self.check_rate_limit()?;
        let prompt = meal_suggestion_prompt(inventory, profile);
        let response: MealSuggestionResponse = self
            .guard
            .fetch_structured(
                MEAL_SUGGESTION_SCHEMA,
                &prompt,
                Some(&suggestion_system_instruction()),
            )
            .await?;
        tracing::info!(count = response.suggestions.len(), "meal suggestions received");
        Ok(response.suggestions)
    }

    /// Generate a seven-day plan starting at `week_start`.
    pub async fn generate_weekly_plan(
        &self,
        week_start: NaiveDate,
        profile: &UserProfile,
        meals_per_day: u32,
    ) -> Result<WeeklyMealPlan, SuggestionError> {
        self.check_rate_limit()?;
        let prompt = weekly_plan_prompt(week_start, profile, meals_per_day);
        let plan: WeeklyMealPlan = self
            .guard
            .fetch_structured(
                WEEKLY_PLAN_SCHEMA,
                &prompt,
                Some(&suggestion_system_instruction()),
            )
            .await?;
        tracing::info!(days = plan.days.len(), "weekly plan received");
        Ok(plan)
    }

    /// Suggest grocery purchases from planned meals, inventory and
    /// low-stock items.
    pub async fn suggest_grocery_items(
        &self,
        planned_meals: &[PlannedMeal],
        inventory: &[InventoryItem],
        low_stock: &[InventoryItem],
    ) -> Result<Vec<GroceryItemSuggestion>, SuggestionError> {
        self.check_rate_limit()?;
        let prompt = grocery_suggestion_prompt(planned_meals, inventory, low_stock);
        let response: GrocerySuggestionResponse = self
            .guard
            .fetch_structured(
                GROCERY_SUGGESTION_SCHEMA,
                &prompt,
                Some(&suggestion_system_instruction()),
            )
            .await?;
        tracing::info!(count = response.items.len(), "grocery suggestions received");
        Ok(response.items)
    }

    fn check_rate_limit(&self) -> Result<(), SuggestionError> {
        let mut budget = self
            .budget
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(last) = budget.last_request
            && last.elapsed() < self.limits.request_cooldown
        {
            return Err(SuggestionError::RateLimited);
        }
        if budget.request_count >= self.limits.max_requests_per_session {
            return Err(SuggestionError::RateLimited);
        }
        budget.request_count += 1;
        budget.last_request = Some(Instant::now());
        Ok(())
    }
}
