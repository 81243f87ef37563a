//! Game state: the persisted progress record and the per-frame snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, GamePhase};
use crate::events::{AudioEvent, GameEvent};
use crate::types::{EntityId, Position, SimTime};

/// Score, currency and progression. This is what crosses the persistence
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u64,
    pub coins: u64,
    pub xp: u32,
    pub level: u32,
    pub threat_speed: f64,
    pub running: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            coins: 0,
            xp: 0,
            level: 1,
            threat_speed: crate::constants::INITIAL_THREAT_SPEED,
            running: false,
        }
    }
}

/// A live entity as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Position,
}

/// Everything the presentation layer needs after an advance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: Position,
    pub threats: Vec<EntityView>,
    pub shields: Vec<EntityView>,
    pub state: GameState,
    pub events: Vec<GameEvent>,
    pub audio_events: Vec<AudioEvent>,
}
