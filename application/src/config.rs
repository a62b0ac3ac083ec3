//! Application-level configuration.

use std::time::Duration;

/// Request budget for the suggestion flows.
#[derive(Debug, Clone)]
pub struct AssistantLimits {
    /// Minimum time between two suggestion requests.
    pub request_cooldown: Duration,
    /// Total suggestion requests allowed per session.
    pub max_requests_per_session: u32,
}

impl Default for AssistantLimits {
    fn default() -> Self {
        Self {
            request_cooldown: Duration::from_secs(3),
            max_requests_per_session: 50,
        }
    }
}
