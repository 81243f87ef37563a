//! Lower-bound check that ends the game.

use cybercat_core::components::Threat;
use cybercat_core::types::{EntityId, Position};

use crate::registry::EntityRegistry;

/// The lowest-id threat whose top edge has reached `lower_bound`, if any.
pub fn first_breach(registry: &EntityRegistry, lower_bound: f64) -> Option<EntityId> {
    registry
        .world()
        .query::<(&Threat, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| pos.y >= lower_bound)
        .map(|(_, (threat, _))| threat.id)
        .min()
}
