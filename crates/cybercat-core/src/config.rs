//! Game configuration: tuning values, level curve and play-field layout.
//!
//! Every field has a default from `constants`, so a partial JSON document
//! only needs to name what it changes.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::{Millis, Position};

/// Errors produced while loading or validating a `GameConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid game config: {0}")]
    Invalid(&'static str),
}

/// Experience required to leave a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LevelCurve {
    /// Same threshold at every level.
    Flat { xp: u32 },
    /// `base + per_level * (level - 1)`.
    Linear { base: u32, per_level: u32 },
}

impl Default for LevelCurve {
    fn default() -> Self {
        LevelCurve::Flat { xp: LEVEL_UP_XP }
    }
}

impl LevelCurve {
    /// Threshold for leaving `level` (levels start at 1).
    pub fn threshold(&self, level: u32) -> u32 {
        match *self {
            LevelCurve::Flat { xp } => xp,
            LevelCurve::Linear { base, per_level } => {
                base.saturating_add(per_level.saturating_mul(level.saturating_sub(1)))
            }
        }
    }
}

/// Which speed a live threat descends at after a level-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedPolicy {
    /// Threats keep the speed they were spawned with.
    #[default]
    FixedAtSpawn,
    /// Every threat follows the ledger's current speed.
    Live,
}

/// Play-field geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayField {
    pub width: f64,
    /// Lower bound for the breach check.
    pub height: f64,
    pub threat_size: f64,
    pub threat_spawn_y: f64,
    pub shield_size: f64,
    pub shield_lift: f64,
    pub player_anchor: Position,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            threat_size: THREAT_SIZE,
            threat_spawn_y: THREAT_SPAWN_Y,
            shield_size: SHIELD_SIZE,
            shield_lift: SHIELD_LIFT,
            player_anchor: Position::new(PLAYER_ANCHOR_X, PLAYER_ANCHOR_Y),
        }
    }
}

impl PlayField {
    pub fn threat_extent(&self) -> DVec2 {
        DVec2::splat(self.threat_size)
    }

    pub fn shield_extent(&self) -> DVec2 {
        DVec2::splat(self.shield_size)
    }

    /// Centre of any shield guarding a player standing at `player`.
    pub fn shield_center(&self, player: Position) -> Position {
        player.offset(0.0, -self.shield_lift)
    }

    /// Top-left corner of a shield guarding `player`.
    pub fn shield_origin(&self, player: Position) -> Position {
        let half = self.shield_size / 2.0;
        self.shield_center(player).offset(-half, -half)
    }

    /// Largest x at which a threat still fits inside the field.
    pub fn max_spawn_x(&self) -> f64 {
        (self.width - self.threat_size).max(0.0)
    }
}

/// Full tuning for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub update_interval_ms: Millis,
    pub spawn_interval_ms: Millis,
    pub initial_threat_speed: f64,
    pub speed_increase: f64,
    pub points_per_block: u32,
    pub coins_per_block: u32,
    pub xp_per_block: u32,
    pub level_curve: LevelCurve,
    pub speed_policy: SpeedPolicy,
    pub shield_ttl_ms: Millis,
    pub field: PlayField,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: UPDATE_INTERVAL_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            initial_threat_speed: INITIAL_THREAT_SPEED,
            speed_increase: THREAT_SPEED_INCREASE,
            points_per_block: POINTS_PER_BLOCK,
            coins_per_block: COINS_PER_BLOCK,
            xp_per_block: XP_PER_BLOCK,
            level_curve: LevelCurve::default(),
            speed_policy: SpeedPolicy::default(),
            shield_ttl_ms: SHIELD_TTL_MS,
            field: PlayField::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall the clock or break the speed invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.update_interval_ms == 0 {
            return Err(ConfigError::Invalid("update_interval_ms must be positive"));
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid("spawn_interval_ms must be positive"));
        }
        if !(self.initial_threat_speed > 0.0 && self.initial_threat_speed.is_finite()) {
            return Err(ConfigError::Invalid("initial_threat_speed must be positive"));
        }
        if !(self.speed_increase >= 0.0 && self.speed_increase.is_finite()) {
            return Err(ConfigError::Invalid("speed_increase must not be negative"));
        }
        if self.level_curve.threshold(1) == 0 {
            return Err(ConfigError::Invalid("level curve threshold must be positive"));
        }
        if self.field.threat_size <= 0.0 || self.field.shield_size <= 0.0 {
            return Err(ConfigError::Invalid("entity sizes must be positive"));
        }
        if self.field.width <= 0.0 || self.field.height <= 0.0 {
            return Err(ConfigError::Invalid("play-field must have a positive area"));
        }
        Ok(())
    }
}
