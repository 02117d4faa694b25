use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use time::OffsetDateTime;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::app::scheduler::DismissScheduler;
use crate::config::notifications::NotificationPolicy;
use crate::domain::notification::{
    Badge, Notification, NotificationAction, NotificationId, NotificationSpec,
};
use crate::infra::effects::{EffectDispatcher, TracingEffects};
use crate::infra::haptics::{HapticFeedback, ImpactStyle, TracingHaptics};

/// Deadline used when a duration overflows the clock.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// The single authoritative collection of live notifications.
///
/// Cloning yields another handle to the same store. Entries keep insertion
/// order; removal never reorders the rest. Every mutation is applied under one
/// lock and published to subscribers before the call returns.
///
/// Adding a notification with a positive duration spawns a timer task, so the
/// store must be used from within a Tokio runtime.
#[derive(Clone)]
pub struct NotificationStore {
    shared: Arc<Shared>,
}

struct Shared {
    state: Mutex<State>,
    updates: watch::Sender<Vec<Notification>>,
    policy: NotificationPolicy,
    haptics: Arc<dyn HapticFeedback>,
    effects: Arc<dyn EffectDispatcher>,
}

struct State {
    entries: Vec<Notification>,
    scheduler: DismissScheduler,
    next_seq: u64,
}

impl NotificationStore {
    pub fn new(policy: NotificationPolicy) -> Self {
        Self::with_collaborators(policy, Arc::new(TracingHaptics), Arc::new(TracingEffects))
    }

    pub fn with_collaborators(
        policy: NotificationPolicy,
        haptics: Arc<dyn HapticFeedback>,
        effects: Arc<dyn EffectDispatcher>,
    ) -> Self {
        let (updates, _) = watch::channel(Vec::new());
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    entries: Vec::new(),
                    scheduler: DismissScheduler::new(),
                    next_seq: 0,
                }),
                updates,
                policy,
                haptics,
                effects,
            }),
        }
    }

    pub fn policy(&self) -> &NotificationPolicy {
        &self.shared.policy
    }

    /// Appends a notification built from `spec` and returns its fresh id.
    pub fn add_notification(&self, spec: NotificationSpec) -> NotificationId {
        let duration = self.shared.policy.effective_duration(&spec);
        let duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        let kind = spec.kind;
        let sound = spec.sound;

        let id = {
            let mut state = self.state();
            state.next_seq += 1;
            let id = NotificationId::generate(state.next_seq);
            let notification =
                Notification::from_spec(id.clone(), spec, duration_ms, OffsetDateTime::now_utc());
            state.entries.push(notification);

            if !duration.is_zero() {
                let now = Instant::now();
                let deadline = now.checked_add(duration).unwrap_or(now + FAR_FUTURE);
                let store = Arc::downgrade(&self.shared);
                let timer_id = id.clone();
                state
                    .scheduler
                    .arm(id.clone(), deadline, move || expire(store, &timer_id));
            }

            self.publish(&state);
            id
        };

        tracing::debug!(
            notification_id = %id,
            kind = kind.as_str(),
            duration_ms = duration_ms,
            "notification added"
        );

        if sound {
            self.shared.haptics.notification_occurred(kind.into());
        }

        id
    }

    /// Removes `id` and cancels its timer. Unknown ids are ignored.
    pub fn remove_notification(&self, id: &NotificationId) -> bool {
        let mut state = self.state();
        if !self.take(&mut state, id) {
            return false;
        }
        drop(state);

        tracing::debug!(notification_id = %id, "notification removed");
        true
    }

    /// Removes every entry and cancels every timer. Returns how many entries
    /// were removed.
    pub fn clear_all(&self) -> usize {
        let mut state = self.state();
        if state.entries.is_empty() {
            return 0;
        }
        let cancelled = state.scheduler.cancel_all();
        let removed = state.entries.len();
        state.entries.clear();
        self.publish(&state);
        drop(state);

        tracing::debug!(removed = removed, timers_cancelled = cancelled, "notifications cleared");
        removed
    }

    /// User-initiated close, e.g. the close button of a toast.
    pub fn dismiss(&self, id: &NotificationId) -> bool {
        let mut state = self.state();
        if !self.take(&mut state, id) {
            return false;
        }
        drop(state);

        tracing::debug!(notification_id = %id, "notification dismissed");
        self.shared.haptics.impact_occurred(ImpactStyle::Light);
        true
    }

    /// User-initiated "clear all" from the notification center.
    pub fn dismiss_all(&self) -> usize {
        let removed = self.clear_all();
        if removed > 0 {
            self.shared.haptics.impact_occurred(ImpactStyle::Light);
        }
        removed
    }

    /// Invokes action `index` of notification `id`: the effect is dispatched and,
    /// when `close` is set, the notification is removed. Returns `None` and does
    /// nothing if either the notification or the action is missing.
    pub fn invoke_action(
        &self,
        id: &NotificationId,
        index: usize,
        close: bool,
    ) -> Option<NotificationAction> {
        let mut state = self.state();
        let action = state
            .entries
            .iter()
            .find(|n| &n.id == id)?
            .actions
            .get(index)?
            .clone();
        if close {
            self.take(&mut state, id);
        }
        drop(state);

        self.shared.haptics.impact_occurred(ImpactStyle::Light);
        self.shared.effects.dispatch(id, &action.effect);
        tracing::debug!(notification_id = %id, index = index, closed = close, "notification action invoked");

        Some(action)
    }

    /// Snapshot of the live notifications, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.state().entries.clone()
    }

    pub fn get(&self, id: &NotificationId) -> Option<Notification> {
        self.state().entries.iter().find(|n| &n.id == id).cloned()
    }

    pub fn contains(&self, id: &NotificationId) -> bool {
        self.state().entries.iter().any(|n| &n.id == id)
    }

    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn badge(&self) -> Badge {
        Badge::new(self.len(), self.shared.policy.badge_cap)
    }

    /// Receiver that always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.shared.updates.subscribe()
    }

    pub fn pending_timers(&self) -> usize {
        self.state().scheduler.pending()
    }

    pub fn has_timer(&self, id: &NotificationId) -> bool {
        self.state().scheduler.is_armed(id)
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.shared.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes `id` under an already-held lock and publishes the change.
    fn take(&self, state: &mut State, id: &NotificationId) -> bool {
        let Some(index) = state.entries.iter().position(|n| &n.id == id) else {
            return false;
        };
        state.scheduler.cancel(id);
        state.entries.remove(index);
        self.publish(state);
        true
    }

    fn publish(&self, state: &State) {
        self.shared.updates.send_replace(state.entries.clone());
    }
}

/// Timer callback. Holds only a weak handle so a dropped store stays dropped.
fn expire(store: Weak<Shared>, id: &NotificationId) {
    let Some(shared) = store.upgrade() else {
        return;
    };
    let store = NotificationStore { shared };

    let mut state = store.state();
    state.scheduler.fired(id);
    let Some(index) = state.entries.iter().position(|n| &n.id == id) else {
        return;
    };
    state.entries.remove(index);
    store.publish(&state);
    drop(state);

    tracing::debug!(notification_id = %id, "notification expired");
}
