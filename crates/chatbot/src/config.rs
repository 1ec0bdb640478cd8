//! Chat worker configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatConfig {
    /// Artificial "composing" delay before every reply.
    pub response_delay_ms: u64,
    /// Submissions that may wait behind the one being answered.
    pub queue_capacity: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: 1_500,
            queue_capacity: 32,
        }
    }
}

impl ChatConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Defaults overlaid with `DEMOCRM_CHAT_DELAY_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup("DEMOCRM_CHAT_DELAY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.response_delay_ms = ms,
                Err(_) => warn!(value = %raw, "ignoring unparsable DEMOCRM_CHAT_DELAY_MS"),
            }
        }
        config
    }
}
