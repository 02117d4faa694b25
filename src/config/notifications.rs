use std::time::Duration;

use crate::domain::notification::NotificationSpec;

pub const DEFAULT_DURATION_MS: u64 = 5000;
pub const DEFAULT_BADGE_CAP: usize = 9;

/// Tunables for the notification store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPolicy {
    /// Used when a spec leaves `duration_ms` unset
    pub default_duration: Duration,
    /// Badge label switches to "<cap>+" above this count
    pub badge_cap: usize,
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        Self {
            default_duration: Duration::from_millis(DEFAULT_DURATION_MS),
            badge_cap: DEFAULT_BADGE_CAP,
        }
    }
}

impl NotificationPolicy {
    /// Persistent specs never get a timer, whatever duration they ask for.
    pub fn effective_duration(&self, spec: &NotificationSpec) -> Duration {
        if spec.persistent {
            return Duration::ZERO;
        }
        spec.duration_ms
            .map(Duration::from_millis)
            .unwrap_or(self.default_duration)
    }
}
