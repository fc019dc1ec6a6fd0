use serde::{Deserialize, Serialize};

/// Duration applied when a notification arrives without one.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Receiver-side notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub default_duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
        }
    }
}
