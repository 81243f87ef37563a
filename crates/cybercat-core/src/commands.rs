//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next advance boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave Idle and start the clock.
    StartGame,
    /// Pointer activated at play-field coordinates. Raises a shield.
    PointerActivated { x: f64, y: f64 },
    /// Abort a running game (host navigated away).
    EndGame,
}
