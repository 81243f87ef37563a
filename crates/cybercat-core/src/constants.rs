//! Simulation constants and tuning defaults.
//!
//! These seed `GameConfig::default()`; a JSON config file may override any
//! of them at startup.

use crate::types::Millis;

// --- Clock ---

/// Update trigger interval (~60 Hz).
pub const UPDATE_INTERVAL_MS: Millis = 16;

/// Threat spawn trigger interval.
pub const SPAWN_INTERVAL_MS: Millis = 2000;

// --- Threats ---

/// Pixels per tick a threat descends at level 1.
pub const INITIAL_THREAT_SPEED: f64 = 2.0;

/// Speed added to new threats on every level-up.
pub const THREAT_SPEED_INCREASE: f64 = 0.1;

/// Edge length of a threat's square hitbox.
pub const THREAT_SIZE: f64 = 40.0;

/// y of a freshly spawned threat (one threat height above the field).
pub const THREAT_SPAWN_Y: f64 = -40.0;

// --- Shields ---

/// Lifetime of a shield.
pub const SHIELD_TTL_MS: Millis = 2000;

/// Edge length of a shield's square hitbox.
pub const SHIELD_SIZE: f64 = 60.0;

/// Distance from the player anchor up to the shield centre.
pub const SHIELD_LIFT: f64 = 60.0;

// --- Rewards ---

pub const POINTS_PER_BLOCK: u32 = 10;
pub const COINS_PER_BLOCK: u32 = 1;
pub const XP_PER_BLOCK: u32 = 5;

/// Experience needed to leave any level (flat curve).
pub const LEVEL_UP_XP: u32 = 100;

// --- Play-field ---

pub const FIELD_WIDTH: f64 = 800.0;

/// Lower bound: a threat whose top reaches this y has breached.
pub const FIELD_HEIGHT: f64 = 600.0;

/// Player anchor, horizontally centred near the bottom edge.
pub const PLAYER_ANCHOR_X: f64 = FIELD_WIDTH / 2.0;
pub const PLAYER_ANCHOR_Y: f64 = FIELD_HEIGHT - 40.0;
