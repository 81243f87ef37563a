//! Tests for core geometry, configuration and wire types.

use glam::DVec2;
use proptest::prelude::*;

use crate::commands::PlayerCommand;
use crate::config::{ConfigError, GameConfig, LevelCurve, SpeedPolicy};
use crate::constants::*;
use crate::enums::*;
use crate::events::GameEvent;
use crate::geometry::{intersects, Rect};
use crate::state::{GameState, SimSnapshot};
use crate::types::{EntityId, Position, SimTime};

// ---- Geometry ----

#[test]
fn test_overlapping_rects_intersect() {
    let a = Rect::new(0.0, 0.0, 40.0, 40.0);
    let b = Rect::new(30.0, 30.0, 40.0, 40.0);
    assert!(intersects(&a, &b));
}

#[test]
fn test_disjoint_rects_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 40.0, 40.0);
    let right = Rect::new(41.0, 0.0, 40.0, 40.0);
    let below = Rect::new(0.0, 40.5, 40.0, 40.0);
    assert!(!intersects(&a, &right));
    assert!(!intersects(&a, &below));
}

#[test]
fn test_touching_edges_count_as_overlap() {
    let a = Rect::new(0.0, 0.0, 40.0, 40.0);
    let b = Rect::new(40.0, 0.0, 10.0, 10.0);
    let corner = Rect::new(40.0, 40.0, 5.0, 5.0);
    assert!(intersects(&a, &b));
    assert!(intersects(&a, &corner));
}

#[test]
fn test_rect_constructors_agree() {
    let size = DVec2::new(60.0, 60.0);
    let centered = Rect::centered(Position::new(400.0, 500.0), size);
    let corner = Rect::from_position(Position::new(370.0, 470.0), size);
    assert_eq!(centered, corner);
    assert_eq!(centered.width(), 60.0);
    assert_eq!(centered.center(), Position::new(400.0, 500.0));
}

#[test]
fn test_negative_extent_is_normalized() {
    let r = Rect::new(10.0, 10.0, -5.0, -5.0);
    assert!(r.min.x <= r.max.x && r.min.y <= r.max.y);
    assert_eq!(r.width(), 5.0);
}

fn arb_rect() -> impl Strategy<Value = Rect> {
    (
        -1000.0f64..1000.0,
        -1000.0f64..1000.0,
        0.0f64..200.0,
        0.0f64..200.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn prop_intersects_is_symmetric(a in arb_rect(), b in arb_rect()) {
        prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
    }

    #[test]
    fn prop_rect_intersects_itself(a in arb_rect()) {
        prop_assert!(intersects(&a, &a));
    }
}

// ---- Configuration ----

#[test]
fn test_default_config_matches_constants() {
    let config = GameConfig::default();
    assert_eq!(config.update_interval_ms, UPDATE_INTERVAL_MS);
    assert_eq!(config.spawn_interval_ms, SPAWN_INTERVAL_MS);
    assert_eq!(config.initial_threat_speed, INITIAL_THREAT_SPEED);
    assert_eq!(config.level_curve.threshold(1), LEVEL_UP_XP);
    assert_eq!(config.speed_policy, SpeedPolicy::FixedAtSpawn);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let json = r#"{
        "spawn_interval_ms": 500,
        "level_curve": { "kind": "linear", "base": 50, "per_level": 25 },
        "speed_policy": "live",
        "field": { "width": 320.0 }
    }"#;
    let config = GameConfig::from_json(json).unwrap();
    assert_eq!(config.spawn_interval_ms, 500);
    assert_eq!(config.update_interval_ms, UPDATE_INTERVAL_MS);
    assert_eq!(config.speed_policy, SpeedPolicy::Live);
    assert_eq!(config.field.width, 320.0);
    assert_eq!(config.field.height, FIELD_HEIGHT);
    assert_eq!(config.level_curve.threshold(1), 50);
    assert_eq!(config.level_curve.threshold(3), 100);
}

#[test]
fn test_invalid_config_rejected() {
    let err = GameConfig::from_json(r#"{ "update_interval_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = GameConfig::from_json(r#"{ "initial_threat_speed": -1.0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = GameConfig::from_json(r#"{ "level_curve": { "kind": "flat", "xp": 0 } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = GameConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_flat_curve_ignores_level() {
    let curve = LevelCurve::Flat { xp: 100 };
    assert_eq!(curve.threshold(1), 100);
    assert_eq!(curve.threshold(42), 100);
}

#[test]
fn test_shield_sits_above_player() {
    let field = GameConfig::default().field;
    let player = field.player_anchor;
    let origin = field.shield_origin(player);
    assert_eq!(origin.x, player.x - SHIELD_SIZE / 2.0);
    assert_eq!(origin.y, player.y - SHIELD_LIFT - SHIELD_SIZE / 2.0);
    assert_eq!(field.max_spawn_x(), FIELD_WIDTH - THREAT_SIZE);
}

// ---- Wire types ----

#[test]
fn test_player_command_tagged() {
    let cmd = PlayerCommand::PointerActivated { x: 12.0, y: 34.0 };
    let json = serde_json::to_string(&cmd).unwrap();
    assert!(json.contains(r#""type":"PointerActivated""#));
    let back: PlayerCommand = serde_json::from_str(&json).unwrap();
    assert_eq!(cmd, back);
}

#[test]
fn test_entity_id_is_transparent() {
    let event = GameEvent::EntityRemoved {
        id: EntityId(7),
        kind: EntityKind::Threat,
        position: Position::new(1.0, 2.0),
        cause: RemovalCause::Blocked,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""id":7"#), "unexpected encoding: {json}");
}

#[test]
fn test_game_state_default_starts_at_level_one() {
    let state = GameState::default();
    assert_eq!(state.level, 1);
    assert_eq!(state.xp, 0);
    assert!(!state.running);
}

#[test]
fn test_empty_snapshot_is_small() {
    let snapshot = SimSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: SimSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.phase, GamePhase::Idle);
    assert!(json.len() < 1024, "Empty snapshot was {} bytes", json.len());
}

#[test]
fn test_sim_time_record_tick() {
    let mut time = SimTime {
        tick: 0,
        now_ms: 1500,
    };
    time.record_tick();
    assert_eq!(time.tick, 1);
    assert_eq!(time.now_ms, 1500);
}
