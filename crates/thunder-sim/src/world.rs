//! Entity store owned by the engine.
//!
//! A flat list kept in spawn order. Ids grow monotonically, so lookups can
//! binary-search and the all-pairs collision scan sees a stable ordering.

use glam::DVec2;

use thunder_core::components::{Entity, EntityId, Spawn};

#[derive(Debug, Default)]
pub struct World {
    entities: Vec<Entity>,
    next_id: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a spawn bundle and return its new id.
    pub fn spawn(&mut self, spawn: Spawn) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            body: spawn.body,
            kind: spawn.kind,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// The whole active set, for systems that need pairwise access.
    pub fn as_mut_slice(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|i| &self.entities[i])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        match self.entities.binary_search_by_key(&id, |e| e.id) {
            Ok(i) => Some(&mut self.entities[i]),
            Err(_) => None,
        }
    }

    /// True while the entity is present and flagged alive.
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(Entity::is_alive)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.is_player() && e.is_alive())
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|e| e.is_player() && e.is_alive())
    }

    /// Centre of the live player craft; the homing target.
    pub fn player_center(&self) -> Option<DVec2> {
        self.player().map(|e| e.body.center())
    }

    pub fn boss(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.is_boss() && e.is_alive())
    }

    pub fn alive_enemy_count(&self) -> usize {
        self.entities
            .iter()
            .filter(|e| e.is_alive() && e.is_enemy_craft())
            .count()
    }

    /// Remove the given ids. `ids` must be ascending.
    pub fn despawn_sorted(&mut self, ids: &[EntityId]) {
        if ids.is_empty() {
            return;
        }
        let mut next = 0;
        self.entities.retain(|e| {
            while next < ids.len() && ids[next] < e.id {
                next += 1;
            }
            !(next < ids.len() && ids[next] == e.id)
        });
    }

    /// Drop every entity and restart id allocation.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.next_id = 0;
    }
}
