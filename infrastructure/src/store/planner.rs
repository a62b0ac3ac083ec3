//! Planner service over the in-memory store.

use crate::store::MemoryStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use larder_application::ports::planner_service::PlannerService;
use larder_domain::{DomainError, MealType, PlannedMeal};

#[async_trait]
impl PlannerService for MemoryStore {
    async fn create_planned_meal(
        &self,
        date: NaiveDate,
        meal_type: MealType,
        title: String,
        dish_id: Option<String>,
        ingredient_names: Vec<String>,
    ) -> Result<PlannedMeal, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::ValidationFailed(
                "meal title cannot be empty".to_string(),
            ));
        }
        let meal = PlannedMeal {
            id: Self::next_id(),
            date,
            meal_type,
            title,
            dish_id,
            ingredient_names,
        };
        let mut state = self.write();
        state.meals.push(meal.clone());
        Ok(meal)
    }

    async fn fetch_planned_meals(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PlannedMeal>, DomainError> {
        Ok(self
            .read()
            .meals
            .iter()
            .filter(|m| m.date >= from && m.date <= to)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_fetch_range_is_inclusive() {
        let store = MemoryStore::new();
        for (day, title) in [
            ("2025-03-09", "before"),
            ("2025-03-10", "start"),
            ("2025-03-16", "end"),
            ("2025-03-17", "after"),
        ] {
            store
                .create_planned_meal(
                    date(day),
                    MealType::Dinner,
                    title.to_string(),
                    None,
                    Vec::new(),
                )
                .await
                .unwrap();
        }

        let meals = store
            .fetch_planned_meals(date("2025-03-10"), date("2025-03-16"))
            .await
            .unwrap();
        let titles: Vec<&str> = meals.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["start", "end"]);
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let store = MemoryStore::new();
        let err = store
            .create_planned_meal(
                date("2025-03-10"),
                MealType::Lunch,
                " ".to_string(),
                None,
                Vec::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed(_)));
    }
}
