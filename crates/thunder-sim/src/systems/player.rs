//! Player intent: firing before collision, steering during the update pass.

use thunder_ai::patterns;
use thunder_core::commands::InputState;
use thunder_core::components::{Body, Craft, CraftRole, EntityId};
use thunder_core::constants::PLAYER_SHOT_DAMAGE;
use thunder_core::types::Playfield;

use crate::world::World;

/// Fire the player's gun if the trigger is held and the cooldown allows.
/// The shot joins the world immediately.
pub fn fire(world: &mut World, input: &InputState) -> Vec<EntityId> {
    if !input.firing {
        return Vec::new();
    }
    let Some(player) = world.player_mut() else {
        return Vec::new();
    };
    let body = player.body;
    let Some(craft) = player.craft_mut() else {
        return Vec::new();
    };
    if !craft.can_shoot || craft.fire_cooldown > 0 {
        return Vec::new();
    }
    let damage = craft
        .player_state()
        .map_or(PLAYER_SHOT_DAMAGE, |s| s.shot_damage(PLAYER_SHOT_DAMAGE));
    craft.fire_cooldown = craft.fire_interval;

    patterns::player_volley(&body, damage)
        .into_iter()
        .map(|shot| world.spawn(shot))
        .collect()
}

/// Move by the normalised intent and count down the player's timers.
/// A move that would leave the playfield is rejected whole.
pub fn steer(body: &mut Body, craft: &mut Craft, input: &InputState, field: &Playfield) {
    let (dx, dy) = input.direction();
    let dir = glam::DVec2::new(dx, dy).normalize_or_zero();
    if dir != glam::DVec2::ZERO {
        let next = body.pos + dir * craft.speed;
        if field.strictly_contains(next, body.size) {
            body.pos = next;
        }
    }

    craft.fire_cooldown = craft.fire_cooldown.saturating_sub(1);
    if let CraftRole::Player(state) = &mut craft.role {
        state.tick_windows();
    }
}
