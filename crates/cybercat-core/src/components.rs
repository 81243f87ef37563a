//! ECS components for hecs entities.
//!
//! Components are plain data. Movement, collision and expiry live in the
//! simulation crate's systems.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Millis};

/// A descending hazard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threat {
    pub id: EntityId,
    /// Pixels per tick, copied from the ledger at spawn time.
    pub speed: f64,
}

/// A transient barrier around the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shield {
    pub id: EntityId,
    pub created_at_ms: Millis,
    pub ttl_ms: Millis,
}
