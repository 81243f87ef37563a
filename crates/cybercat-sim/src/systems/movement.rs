//! Kinematics: threats descend, shields follow the player.

use cybercat_core::components::{Shield, Threat};
use cybercat_core::config::SpeedPolicy;
use cybercat_core::types::Position;

use crate::registry::EntityRegistry;

/// Move every threat down by its speed (or the live speed, per policy).
pub fn advance_threats(registry: &mut EntityRegistry, policy: SpeedPolicy, live_speed: f64) {
    for (_entity, (threat, pos)) in registry
        .world_mut()
        .query_mut::<(&Threat, &mut Position)>()
    {
        let speed = match policy {
            SpeedPolicy::FixedAtSpawn => threat.speed,
            SpeedPolicy::Live => live_speed,
        };
        pos.y += speed;
    }
}

/// Snap every shield to `origin`, the top-left corner of the barrier around
/// the player.
pub fn track_player(registry: &mut EntityRegistry, origin: Position) {
    for (_entity, (_shield, pos)) in registry
        .world_mut()
        .query_mut::<(&Shield, &mut Position)>()
    {
        *pos = origin;
    }
}
