use crate::domain::notification::NotificationKind;

/// Feedback pattern played when a notification appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationFeedback {
    Success,
    Warning,
    Error,
}

impl From<NotificationKind> for NotificationFeedback {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Error => NotificationFeedback::Error,
            NotificationKind::Warning => NotificationFeedback::Warning,
            _ => NotificationFeedback::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
}

/// Device vibration capability (the Telegram WebApp haptic API on the client).
/// Calls are fire-and-forget.
pub trait HapticFeedback: Send + Sync {
    fn notification_occurred(&self, feedback: NotificationFeedback);
    fn impact_occurred(&self, style: ImpactStyle);
}

/// Used when no device is attached; records the request in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHaptics;

impl HapticFeedback for TracingHaptics {
    fn notification_occurred(&self, feedback: NotificationFeedback) {
        tracing::trace!(feedback = ?feedback, "haptic notification feedback");
    }

    fn impact_occurred(&self, style: ImpactStyle) {
        tracing::trace!(style = ?style, "haptic impact feedback");
    }
}
