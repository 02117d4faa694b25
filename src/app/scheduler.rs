use std::collections::HashMap;

use tokio::task::AbortHandle;
use tokio::time::Instant;

use crate::domain::notification::NotificationId;

/// Side-table of pending auto-dismiss timers, one per live notification.
///
/// A timer is either armed, fired (its task ran and reported back through
/// [`DismissScheduler::fired`]) or cancelled (the task was aborted). Armed
/// timers are aborted when the scheduler is dropped.
#[derive(Debug, Default)]
pub(crate) struct DismissScheduler {
    timers: HashMap<NotificationId, AbortHandle>,
}

impl DismissScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a task that runs `on_fire` at `deadline`. Must be called from
    /// within a Tokio runtime.
    pub fn arm<F>(&mut self, id: NotificationId, deadline: Instant, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_fire();
        });

        if let Some(previous) = self.timers.insert(id, task.abort_handle()) {
            previous.abort();
        }
    }

    /// Called from the timer task itself, so nothing is aborted.
    pub fn fired(&mut self, id: &NotificationId) -> bool {
        self.timers.remove(id).is_some()
    }

    pub fn cancel(&mut self, id: &NotificationId) -> bool {
        match self.timers.remove(id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.timers.len();
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
        cancelled
    }

    pub fn is_armed(&self, id: &NotificationId) -> bool {
        self.timers.contains_key(id)
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }
}

impl Drop for DismissScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
