//! Events emitted by the simulation for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, RemovalCause};
use crate::types::{EntityId, Position};

/// Notifications a renderer needs to mirror the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A threat spawned or a shield was raised.
    EntityAdded {
        id: EntityId,
        kind: EntityKind,
        position: Position,
    },
    /// An entity left the registry.
    EntityRemoved {
        id: EntityId,
        kind: EntityKind,
        position: Position,
        cause: RemovalCause,
    },
    /// Score display needs refreshing.
    ScoreChanged {
        score: u64,
        coins: u64,
        xp: u32,
        level: u32,
    },
    /// Experience crossed the threshold.
    LevelUp { level: u32, threat_speed: f64 },
    /// The game reached its terminal state.
    GameOver { final_score: u64 },
}

/// Sound cues for the host's audio system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioEvent {
    /// Pointer input raised a shield.
    ShieldRaised,
    /// A shield destroyed a threat.
    ThreatBlocked,
    LevelUp,
    GameOver,
}
