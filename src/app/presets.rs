//! Ready-made notification specs for common game events.
//!
//! Everything here is a pure constructor: pass the result to
//! [`NotificationStore::add_notification`](crate::app::notifications::NotificationStore::add_notification).

use serde::{Deserialize, Serialize};

use crate::domain::notification::{NotificationAction, NotificationKind, NotificationSpec};

pub const BATTLE_WON_DURATION_MS: u64 = 10_000;

pub fn success(title: impl Into<String>, message: Option<String>) -> NotificationSpec {
    shorthand(NotificationKind::Success, title, message)
}

pub fn error(title: impl Into<String>, message: Option<String>) -> NotificationSpec {
    shorthand(NotificationKind::Error, title, message)
}

pub fn info(title: impl Into<String>, message: Option<String>) -> NotificationSpec {
    shorthand(NotificationKind::Info, title, message)
}

pub fn warning(title: impl Into<String>, message: Option<String>) -> NotificationSpec {
    shorthand(NotificationKind::Warning, title, message)
}

fn shorthand(
    kind: NotificationKind,
    title: impl Into<String>,
    message: Option<String>,
) -> NotificationSpec {
    let mut spec = NotificationSpec::new(kind, title);
    spec.message = message;
    spec
}

pub fn level_up(level: u32) -> NotificationSpec {
    NotificationSpec::new(NotificationKind::Achievement, format!("Level {} reached!", level))
        .message("Congratulations on levelling up!")
        .icon("🎉")
        .sound()
}

pub fn resource_full(resource: &str) -> NotificationSpec {
    NotificationSpec::new(NotificationKind::Warning, "Storage full")
        .message(format!(
            "{} has reached its limit. Upgrade your storage or spend some resources.",
            resource
        ))
        .action(NotificationAction::primary("Go to storage", "navigate:storage"))
}

pub fn battle_won(opponent: &str, rewards: &str) -> NotificationSpec {
    NotificationSpec::new(NotificationKind::Battle, "Victory!")
        .message(format!("You defeated {} and earned {}", opponent, rewards))
        .icon("🏆")
        .sound()
        .duration_ms(BATTLE_WON_DURATION_MS)
}

pub fn battle_lost(opponent: &str) -> NotificationSpec {
    NotificationSpec::new(NotificationKind::Battle, "Defeat")
        .message(format!("{} won this battle. Train your troops and try again.", opponent))
        .action(NotificationAction::secondary("Battle log", "navigate:battles"))
}

pub fn quest_completed(quest: &str, reward: &str) -> NotificationSpec {
    NotificationSpec::new(NotificationKind::Achievement, "Quest completed")
        .message(format!("{} is done. Reward: {}", quest, reward))
        .sound()
        .action(NotificationAction::primary("Claim", "navigate:quests"))
}

/// Guild invites stay until the player answers them.
pub fn guild_invite(guild_name: &str, inviter: &str) -> NotificationSpec {
    NotificationSpec::new(NotificationKind::Info, "Guild invitation")
        .message(format!("{} invites you to join the guild \"{}\"", inviter, guild_name))
        .persistent()
        .action(NotificationAction::primary(
            "Accept",
            format!("guild_invite:accept:{}", guild_name),
        ))
        .action(NotificationAction::secondary(
            "Decline",
            format!("guild_invite:decline:{}", guild_name),
        ))
}

/// Game events that map onto a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    LevelUp { level: u32 },
    ResourceFull { resource: String },
    BattleWon { opponent: String, rewards: String },
    BattleLost { opponent: String },
    QuestCompleted { quest: String, reward: String },
    GuildInvite { guild_name: String, inviter: String },
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::LevelUp { .. } => "level_up",
            GameEvent::ResourceFull { .. } => "resource_full",
            GameEvent::BattleWon { .. } => "battle_won",
            GameEvent::BattleLost { .. } => "battle_lost",
            GameEvent::QuestCompleted { .. } => "quest_completed",
            GameEvent::GuildInvite { .. } => "guild_invite",
        }
    }
}

impl From<&GameEvent> for NotificationSpec {
    fn from(event: &GameEvent) -> Self {
        match event {
            GameEvent::LevelUp { level } => level_up(*level),
            GameEvent::ResourceFull { resource } => resource_full(resource),
            GameEvent::BattleWon { opponent, rewards } => battle_won(opponent, rewards),
            GameEvent::BattleLost { opponent } => battle_lost(opponent),
            GameEvent::QuestCompleted { quest, reward } => quest_completed(quest, reward),
            GameEvent::GuildInvite { guild_name, inviter } => guild_invite(guild_name, inviter),
        }
    }
}
