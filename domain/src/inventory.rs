//! Inventory domain entities

use crate::core::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an inventory item is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageLocation {
    Pantry,
    Fridge,
    Freezer,
}

impl StorageLocation {
    pub fn as_str(&self) -> &str {
        match self {
            StorageLocation::Pantry => "pantry",
            StorageLocation::Fridge => "fridge",
            StorageLocation::Freezer => "freezer",
        }
    }

    /// Parse a location name, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "pantry" => Ok(StorageLocation::Pantry),
            "fridge" => Ok(StorageLocation::Fridge),
            "freezer" => Ok(StorageLocation::Freezer),
            _ => Err(DomainError::InvalidLocation(s.to_string())),
        }
    }
}

impl std::fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single stocked ingredient (Entity).
///
/// Identified by a stable store-assigned id string. Quantity never goes
/// negative — the stores enforce that invariant on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub location: StorageLocation,
    pub purchase_date: DateTime<Utc>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub low_stock_threshold: f64,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Whether the item has dropped to or below its low-stock threshold.
    ///
    /// A threshold of zero means low-stock tracking is disabled.
    pub fn is_low_stock(&self) -> bool {
        self.low_stock_threshold > 0.0 && self.quantity <= self.low_stock_threshold
    }

    /// Whether the recorded unit matches, ignoring letter case.
    pub fn unit_matches(&self, unit: &str) -> bool {
        self.unit.eq_ignore_ascii_case(unit)
    }
}
