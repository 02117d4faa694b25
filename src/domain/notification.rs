use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;
use uuid::Uuid;

/// Opaque identifier of a live notification. Never reused within a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    /// `seq` comes from the owning store's counter; the UUID keeps ids
    /// distinct across stores.
    pub(crate) fn generate(seq: u64) -> Self {
        Self(format!("notification-{}-{}", seq, Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NotificationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
    Achievement,
    Battle,
}

impl NotificationKind {
    /// Default icon; only affects presentation.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
            NotificationKind::Warning => "⚠️",
            NotificationKind::Info => "ℹ️",
            NotificationKind::Achievement => "🏆",
            NotificationKind::Battle => "⚔️",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
            NotificationKind::Achievement => "achievement",
            NotificationKind::Battle => "battle",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionEmphasis {
    Primary,
    #[default]
    Secondary,
}

/// A button attached to a notification. `effect` is an opaque key handed to
/// the effect dispatcher when the action is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    pub label: String,
    pub effect: String,
    #[serde(default)]
    pub emphasis: ActionEmphasis,
}

impl NotificationAction {
    pub fn primary(label: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            effect: effect.into(),
            emphasis: ActionEmphasis::Primary,
        }
    }

    pub fn secondary(label: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            effect: effect.into(),
            emphasis: ActionEmphasis::Secondary,
        }
    }
}

/// Everything needed to create a notification except its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSpec {
    pub kind: NotificationKind,
    pub title: String,
    #[serde(default)]
    pub message: Option<String>,
    /// `None` falls back to the store's default duration.
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub persistent: bool,
    #[serde(default)]
    pub actions: Vec<NotificationAction>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sound: bool,
}

impl NotificationSpec {
    pub fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: None,
            duration_ms: None,
            persistent: false,
            actions: Vec::new(),
            icon: None,
            image: None,
            sound: false,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    pub fn action(mut self, action: NotificationAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn sound(mut self) -> Self {
        self.sound = true;
        self
    }
}

/// A live notification. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    /// Effective duration; 0 means the entry is never auto-dismissed.
    pub duration_ms: u64,
    pub persistent: bool,
    pub actions: Vec<NotificationAction>,
    pub icon: String,
    pub image: Option<String>,
    pub sound: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
}

impl Notification {
    pub(crate) fn from_spec(
        id: NotificationId,
        spec: NotificationSpec,
        duration_ms: u64,
        created_at: OffsetDateTime,
    ) -> Self {
        let expires_at = if duration_ms > 0 {
            let millis = i64::try_from(duration_ms).unwrap_or(i64::MAX);
            created_at.checked_add(time::Duration::milliseconds(millis))
        } else {
            None
        };
        let icon = spec.icon.unwrap_or_else(|| spec.kind.icon().to_string());

        Self {
            id,
            kind: spec.kind,
            title: spec.title,
            message: spec.message,
            duration_ms,
            persistent: spec.persistent,
            actions: spec.actions,
            icon,
            image: spec.image,
            sound: spec.sound,
            created_at,
            expires_at,
        }
    }

    pub fn auto_dismisses(&self) -> bool {
        self.duration_ms > 0
    }
}

/// Unread counter shown on the notification-center button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub count: usize,
    /// `None` when there is nothing to show.
    pub label: Option<String>,
}

impl Badge {
    pub fn new(count: usize, cap: usize) -> Self {
        let label = match count {
            0 => None,
            n if n > cap => Some(format!("{}+", cap)),
            n => Some(n.to_string()),
        };
        Self { count, label }
    }
}
