//! Infrastructure layer for larder
//!
//! Adapters for the application layer's ports: the backend model proxy
//! client, the in-memory data store implementing the four Domain Service
//! ports, figment-based configuration loading, and the JSONL conversation
//! logger.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use gemini::GeminiProxyClient;
pub use logging::JsonlConversationLogger;
pub use store::{MemoryStore, seed::seed_demo_data};
