use crate::domain::notification::NotificationId;

/// Receives the effect key of an invoked notification action
/// (e.g. `navigate:storage`, `guild_invite:accept:<guild>`).
pub trait EffectDispatcher: Send + Sync {
    fn dispatch(&self, notification_id: &NotificationId, effect: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEffects;

impl EffectDispatcher for TracingEffects {
    fn dispatch(&self, notification_id: &NotificationId, effect: &str) {
        tracing::info!(notification_id = %notification_id, effect = effect, "notification action invoked");
    }
}
