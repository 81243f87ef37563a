//! Shield/threat overlap detection.

use cybercat_core::components::{Shield, Threat};
use cybercat_core::config::PlayField;
use cybercat_core::geometry::{intersects, Rect};
use cybercat_core::types::{EntityId, Position};

use crate::registry::EntityRegistry;

/// Ids of threats overlapping at least one shield, ascending. Shields are
/// not consumed, so one shield may block several threats in the same tick.
pub fn find_blocked(registry: &EntityRegistry, field: &PlayField) -> Vec<EntityId> {
    let world = registry.world();
    let shield_size = field.shield_extent();
    let threat_size = field.threat_extent();

    let shields: Vec<Rect> = world
        .query::<(&Shield, &Position)>()
        .iter()
        .map(|(_, (_, pos))| Rect::from_position(*pos, shield_size))
        .collect();
    if shields.is_empty() {
        return Vec::new();
    }

    let mut blocked: Vec<EntityId> = world
        .query::<(&Threat, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| {
            let hitbox = Rect::from_position(**pos, threat_size);
            shields.iter().any(|shield| intersects(&hitbox, shield))
        })
        .map(|(_, (threat, _))| threat.id)
        .collect();
    blocked.sort();
    blocked
}
