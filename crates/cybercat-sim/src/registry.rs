//! Entity registry: owns every live threat and shield.
//!
//! Storage is a hecs world (the arena) plus an id index, so removal is an
//! index lookup and stale ids are harmless.

use std::collections::HashMap;

use hecs::{Entity, World};

use cybercat_core::components::{Shield, Threat};
use cybercat_core::enums::EntityKind;
use cybercat_core::state::EntityView;
use cybercat_core::types::{EntityId, Millis, Position};

/// What `remove` hands back the first time an id is removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Removed {
    pub kind: EntityKind,
    pub position: Position,
}

#[derive(Default)]
pub struct EntityRegistry {
    world: World,
    index: HashMap<EntityId, Entity>,
    next_id: u32,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_threat(&mut self, position: Position, speed: f64) -> EntityId {
        let id = self.allocate_id();
        let entity = self.world.spawn((Threat { id, speed }, position));
        self.index.insert(id, entity);
        id
    }

    pub fn add_shield(&mut self, position: Position, created_at_ms: Millis, ttl_ms: Millis) -> EntityId {
        let id = self.allocate_id();
        let entity = self.world.spawn((
            Shield {
                id,
                created_at_ms,
                ttl_ms,
            },
            position,
        ));
        self.index.insert(id, entity);
        id
    }

    /// Remove an entity. Returns `None` if the id is unknown or already gone;
    /// expiry and collision may both try to remove the same entity.
    pub fn remove(&mut self, id: EntityId) -> Option<Removed> {
        let entity = self.index.remove(&id)?;
        let removed = self.describe(entity);
        let _ = self.world.despawn(entity);
        removed
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Kind of a live entity, `None` once it is gone.
    pub fn kind(&self, id: EntityId) -> Option<EntityKind> {
        let entity = *self.index.get(&id)?;
        self.describe(entity).map(|found| found.kind)
    }

    pub fn position(&self, id: EntityId) -> Option<Position> {
        let entity = *self.index.get(&id)?;
        self.world.get::<&Position>(entity).ok().map(|p| *p)
    }

    /// Live entities of one kind, ascending by id.
    pub fn all(&self, kind: EntityKind) -> Vec<EntityView> {
        let mut views: Vec<EntityView> = match kind {
            EntityKind::Threat => self
                .world
                .query::<(&Threat, &Position)>()
                .iter()
                .map(|(_, (threat, pos))| EntityView {
                    id: threat.id,
                    kind,
                    position: *pos,
                })
                .collect(),
            EntityKind::Shield => self
                .world
                .query::<(&Shield, &Position)>()
                .iter()
                .map(|(_, (shield, pos))| EntityView {
                    id: shield.id,
                    kind,
                    position: *pos,
                })
                .collect(),
        };
        views.sort_by_key(|v| v.id);
        views
    }

    pub fn threat_ids(&self) -> Vec<EntityId> {
        self.all(EntityKind::Threat).into_iter().map(|v| v.id).collect()
    }

    pub fn shield_ids(&self) -> Vec<EntityId> {
        self.all(EntityKind::Shield).into_iter().map(|v| v.id).collect()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Threat => self.world.query::<&Threat>().iter().count(),
            EntityKind::Shield => self.world.query::<&Shield>().iter().count(),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Read-only access for systems and snapshots.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for systems that move entities. Spawning or despawning
    /// through this handle would desync the index; use `add_*` / `remove`.
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    fn describe(&self, entity: Entity) -> Option<Removed> {
        let position = *self.world.get::<&Position>(entity).ok()?;
        let kind = if self.world.get::<&Threat>(entity).is_ok() {
            EntityKind::Threat
        } else {
            EntityKind::Shield
        };
        Some(Removed { kind, position })
    }
}
