//! Configuration file schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration file structure (`larder.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: BackendConfig,
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}

/// `[backend]` section: where the model proxy lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend proxy.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
        }
    }
}

/// `[assistant]` section: suggestion request budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub request_cooldown_secs: u64,
    pub max_requests_per_session: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            request_cooldown_secs: 3,
            max_requests_per_session: 50,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Where to write the JSONL conversation transcript; disabled when
    /// unset.
    pub conversation_log: Option<PathBuf>,
}
