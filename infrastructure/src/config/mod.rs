//! Configuration loading (figment-based multi-source merge).

pub mod file_config;
pub mod loader;

pub use file_config::{AssistantConfig, BackendConfig, FileConfig, LoggingConfig};
pub use loader::ConfigLoader;
