//! Spawn factories for setting up a run.

use glam::DVec2;

use thunder_core::components::*;
use thunder_core::config::PlayerConfig;
use thunder_core::constants::*;
use thunder_core::types::Playfield;

use crate::world::World;

/// Clear the world and place the player for a fresh run.
pub fn setup_run(world: &mut World, field: &Playfield, config: &PlayerConfig) -> EntityId {
    world.clear();
    spawn_player(world, field, config)
}

/// Spawn the player craft at bottom-centre.
pub fn spawn_player(world: &mut World, field: &Playfield, config: &PlayerConfig) -> EntityId {
    let size = DVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
    let pos = DVec2::new(
        field.width / 2.0,
        field.height - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
    );
    let state = PlayerState::new(config.max_hp, config.damage_cooldown_ticks);
    let craft = Craft::new(
        config.hp,
        CraftRole::Player(state),
        config.fire_interval_ticks,
        config.speed,
    )
    .shooting(true);
    world.spawn(Spawn::new(Body::new(pos, size), EntityKind::Craft(craft)))
}

/// Pull the player back inside a (possibly shrunk) playfield.
pub fn clamp_player(world: &mut World, field: &Playfield) {
    if let Some(player) = world.player_mut() {
        let body = &mut player.body;
        let max = DVec2::new(field.width, field.height) - body.size - DVec2::ONE;
        body.pos = body.pos.min(max).max(DVec2::ONE);
    }
}
