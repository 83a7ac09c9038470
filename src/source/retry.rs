//! Retry policy for wrong-length words

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bounded retry with exponential backoff
///
/// `max_attempts` counts every request, including the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            initial_backoff_ms: 100,
            max_backoff_ms: 2_000,
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// Delay before the request that follows request number `completed`
    ///
    /// The first retry waits `initial_backoff_ms`; each later one is
    /// multiplied, capped at `max_backoff_ms`.
    #[must_use]
    pub fn backoff(&self, completed: u32) -> Duration {
        let exponent = completed.saturating_sub(1);
        let factor = u64::from(self.multiplier).saturating_pow(exponent);
        let millis = self
            .initial_backoff_ms
            .saturating_mul(factor)
            .min(self.max_backoff_ms);
        Duration::from_millis(millis)
    }

    /// True when another request is allowed after `completed` requests
    #[inline]
    #[must_use]
    pub const fn allows_retry(&self, completed: u32) -> bool {
        completed < self.max_attempts
    }
}
