//! Demo data seeding so the CLI is usable out of the box.

use crate::store::MemoryStore;
use chrono::{Duration, Utc};
use larder_application::ports::inventory_service::{InventoryService, NewInventoryItem};
use larder_application::ports::planner_service::PlannerService;
use larder_domain::{DomainError, MealType, StorageLocation};

/// Populate the store with a small pantry and one planned meal.
pub async fn seed_demo_data(store: &MemoryStore) -> Result<(), DomainError> {
    let pantry = [
        ("Rice", "grains", 1000.0, "g", StorageLocation::Pantry, None, 200.0),
        ("Pasta", "grains", 500.0, "g", StorageLocation::Pantry, None, 100.0),
        ("Olive oil", "condiments", 750.0, "ml", StorageLocation::Pantry, None, 100.0),
        ("Milk", "dairy", 1.0, "L", StorageLocation::Fridge, Some(4), 0.5),
        ("Eggs", "dairy", 12.0, "pcs", StorageLocation::Fridge, Some(10), 4.0),
        ("Chicken breast", "meat", 600.0, "g", StorageLocation::Freezer, Some(60), 0.0),
        ("Tomatoes", "produce", 6.0, "pcs", StorageLocation::Fridge, Some(5), 2.0),
        ("Salt", "condiments", 80.0, "g", StorageLocation::Pantry, None, 100.0),
    ];

    for (name, category, quantity, unit, location, expiry_days, threshold) in pantry {
        store
            .create_item(NewInventoryItem {
                name: name.to_string(),
                category: category.to_string(),
                quantity,
                unit: unit.to_string(),
                location,
                purchase_date: Utc::now(),
                expiry_date: expiry_days.map(|days| Utc::now() + Duration::days(days)),
                low_stock_threshold: threshold,
            })
            .await?;
    }

    store
        .create_planned_meal(
            Utc::now().date_naive() + Duration::days(1),
            MealType::Dinner,
            "Tomato pasta".to_string(),
            None,
            vec![
                "Pasta".to_string(),
                "Tomatoes".to_string(),
                "Parmesan".to_string(),
            ],
        )
        .await?;

    tracing::info!("demo data seeded");
    Ok(())
}
