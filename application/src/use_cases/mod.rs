//! Use cases (application services)

pub mod assistant;
pub mod suggestions;
