//! Threat spawning.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use cybercat_core::config::PlayField;
use cybercat_core::types::{EntityId, Position};

use crate::registry::EntityRegistry;

/// Random column that keeps the whole threat inside the field.
pub fn random_column(rng: &mut ChaCha8Rng, field: &PlayField) -> f64 {
    rng.gen_range(0.0..=field.max_spawn_x())
}

/// Spawn a threat at column `x` on the spawn row.
pub fn spawn_threat(registry: &mut EntityRegistry, field: &PlayField, x: f64, speed: f64) -> EntityId {
    let x = x.clamp(0.0, field.max_spawn_x());
    registry.add_threat(Position::new(x, field.threat_spawn_y), speed)
}
