//! Game Notification Preset Tests

use herald::app::presets::{self, GameEvent};
use herald::config::notifications::NotificationPolicy;
use herald::domain::notification::{ActionEmphasis, NotificationKind, NotificationSpec};
use std::time::Duration;

#[test]
fn shorthands_use_default_duration() {
    let policy = NotificationPolicy::default();
    let spec = presets::error("Payment failed", Some("Try again later".into()));

    assert_eq!(spec.kind, NotificationKind::Error);
    assert_eq!(spec.message.as_deref(), Some("Try again later"));
    assert_eq!(spec.duration_ms, None);
    assert_eq!(policy.effective_duration(&spec), Duration::from_millis(5000));
}

#[test]
fn level_up_is_a_loud_achievement() {
    let spec = presets::level_up(5);

    assert_eq!(spec.kind, NotificationKind::Achievement);
    assert_eq!(spec.title, "Level 5 reached!");
    assert_eq!(spec.icon.as_deref(), Some("🎉"));
    assert!(spec.sound);
    assert!(!spec.persistent);
}

#[test]
fn resource_full_links_to_storage() {
    let spec = presets::resource_full("Iron");

    assert_eq!(spec.kind, NotificationKind::Warning);
    assert!(spec.message.unwrap().starts_with("Iron has reached its limit"));
    assert_eq!(spec.actions.len(), 1);
    assert_eq!(spec.actions[0].effect, "navigate:storage");
    assert_eq!(spec.actions[0].emphasis, ActionEmphasis::Primary);
}

#[test]
fn battle_won_stays_longer() {
    let spec = presets::battle_won("Dark Lord", "300 TON coins");

    assert_eq!(spec.kind, NotificationKind::Battle);
    assert_eq!(spec.duration_ms, Some(presets::BATTLE_WON_DURATION_MS));
    assert_eq!(
        spec.message.as_deref(),
        Some("You defeated Dark Lord and earned 300 TON coins")
    );
    assert!(spec.sound);
}

#[test]
fn guild_invite_waits_for_an_answer() {
    let policy = NotificationPolicy::default();
    let spec = presets::guild_invite("Iron Wolves", "Ragnar");

    assert!(spec.persistent);
    assert_eq!(policy.effective_duration(&spec), Duration::ZERO);
    let labels: Vec<&str> = spec.actions.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["Accept", "Decline"]);
    assert_eq!(spec.actions[1].emphasis, ActionEmphasis::Secondary);
}

#[test]
fn game_event_decodes_from_tagged_json() {
    let event: GameEvent = serde_json::from_str(
        r#"{"type":"quest_completed","quest":"Build a farm","reward":"50 wood"}"#,
    )
    .unwrap();
    assert_eq!(event.name(), "quest_completed");

    let spec = NotificationSpec::from(&event);
    assert_eq!(spec, presets::quest_completed("Build a farm", "50 wood"));
    assert_eq!(spec.kind, NotificationKind::Achievement);
}

#[test]
fn battle_lost_event_maps_to_preset() {
    let event = GameEvent::BattleLost {
        opponent: "Goblin Chief".into(),
    };
    let spec = NotificationSpec::from(&event);

    assert_eq!(spec.kind, NotificationKind::Battle);
    assert_eq!(spec.title, "Defeat");
    assert_eq!(spec.actions[0].effect, "navigate:battles");
}
