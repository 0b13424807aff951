//! Cleanup system: removes entities flagged not-alive during the tick.

use thunder_core::components::EntityId;

use crate::world::World;

/// Remove every dead entity. Uses a pre-allocated buffer to avoid per-tick
/// allocation. Returns the number removed.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<EntityId>) -> usize {
    despawn_buffer.clear();
    despawn_buffer.extend(world.iter().filter(|e| !e.is_alive()).map(|e| e.id));

    let removed = despawn_buffer.len();
    world.despawn_sorted(despawn_buffer);
    despawn_buffer.clear();
    removed
}
