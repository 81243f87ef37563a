//! Snapshot system: builds a `SimSnapshot` from the registry.
//!
//! This system is read-only.

use cybercat_core::enums::{EntityKind, GamePhase};
use cybercat_core::events::{AudioEvent, GameEvent};
use cybercat_core::state::{GameState, SimSnapshot};
use cybercat_core::types::{Position, SimTime};

use crate::registry::EntityRegistry;

pub fn build_snapshot(
    registry: &EntityRegistry,
    time: &SimTime,
    phase: GamePhase,
    player: Position,
    state: GameState,
    events: Vec<GameEvent>,
    audio_events: Vec<AudioEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        phase,
        player,
        threats: registry.all(EntityKind::Threat),
        shields: registry.all(EntityKind::Shield),
        state,
        events,
        audio_events,
    }
}
