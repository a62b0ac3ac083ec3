//! Prompt builders: pure string assembly over domain snapshots.

pub mod assistant;
pub mod suggestion;
