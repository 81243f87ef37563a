//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Controller lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, waiting for `start`.
    #[default]
    Idle,
    /// Clock running, threats descending.
    Running,
    /// Terminal. A new game needs a new controller.
    GameOver,
}

/// The two kinds of entity the registry owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Threat,
    Shield,
}

/// Why an entity left the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalCause {
    /// Threat destroyed by a shield (reward path).
    Blocked,
    /// Threat crossed the lower bound and ended the game.
    Breached,
    /// Shield reached the end of its lifetime.
    Expired,
    /// Shield cleared because the game stopped.
    Cleared,
}
