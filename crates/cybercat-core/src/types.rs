//! Fundamental simulation types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Simulation time in milliseconds.
pub type Millis = u64;

/// 2D position in play-field space (pixels).
/// x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Stable identifier for a threat or shield. Never reused within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of update ticks executed so far.
    pub tick: u64,
    /// Virtual clock reading in milliseconds.
    pub now_ms: Millis,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position shifted by the given offset.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl SimTime {
    /// Record one executed update tick.
    pub fn record_tick(&mut self) {
        self.tick += 1;
    }
}
