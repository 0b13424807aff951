//! Per-enemy tick update and death hook.
//!
//! The update runs in a fixed order: cooldown, boss stage evaluation, shoot,
//! move, bounds. Bullets fired are returned to the caller, which buffers them
//! until the whole update pass is done.

use thunder_core::components::{Body, Craft, CraftRole, Spawn};
use thunder_core::constants::{BOSS_PATROL_LEFT, BOSS_PATROL_RIGHT};
use thunder_core::enums::{BossStage, EnemyClass, GameSignal};
use thunder_core::trajectory::TargetProvider;
use thunder_core::types::Playfield;

use crate::fsm::{self, BossContext};
use crate::patterns;

/// Everything an enemy may read from the world this tick.
pub struct EnemyTickContext<'a> {
    pub field: &'a Playfield,
    pub target: &'a dyn TargetProvider,
}

/// What one enemy did this tick.
#[derive(Debug, Default)]
pub struct EnemyUpdate {
    pub spawned: Vec<Spawn>,
    /// Set when a boss entered a new stage.
    pub stage_changed: Option<BossStage>,
    /// Rank-and-file enemy flew off the bottom edge (no score).
    pub left_field: bool,
}

/// Advance one enemy craft by a tick. The player and dead crafts are ignored.
pub fn update_enemy(body: &mut Body, craft: &mut Craft, ctx: &EnemyTickContext<'_>) -> EnemyUpdate {
    let mut out = EnemyUpdate::default();
    if !body.is_alive() || craft.is_player() {
        return out;
    }

    if craft.fire_cooldown > 0 {
        craft.fire_cooldown -= 1;
    }
    // A stage change resets the cooldown to the new interval, so it has to
    // land after the countdown and before the shot.
    if craft.is_boss() {
        out.stage_changed = apply_stage(craft);
    }
    if craft.can_shoot && craft.fire_cooldown == 0 {
        out.spawned = shoot(body, craft, ctx);
        craft.fire_cooldown = craft.fire_interval;
    }

    match &mut craft.role {
        CraftRole::Boss(state) => {
            let left = ctx.field.width * BOSS_PATROL_LEFT;
            let right = ctx.field.width * BOSS_PATROL_RIGHT - body.size.x;
            if state.moving_right {
                body.pos.x += craft.speed;
                if body.pos.x >= right {
                    state.moving_right = false;
                }
            } else {
                body.pos.x -= craft.speed;
                if body.pos.x <= left {
                    state.moving_right = true;
                }
            }
        }
        CraftRole::Normal | CraftRole::Elite => {
            body.pos.y += craft.speed;
            if body.pos.y >= ctx.field.height {
                body.kill();
                out.left_field = true;
            }
        }
        CraftRole::Player(_) => {}
    }

    out
}

/// Run the stage FSM and apply its result. Returns the new stage on a change.
fn apply_stage(craft: &mut Craft) -> Option<BossStage> {
    let stage = craft.boss_state()?.stage;
    let update = fsm::evaluate(&BossContext {
        stage,
        hp: craft.hp,
        fire_interval: craft.fire_interval,
        fire_cooldown: craft.fire_cooldown,
        speed: craft.speed,
    });
    if !update.stage_changed {
        return None;
    }

    craft.fire_interval = update.fire_interval;
    craft.fire_cooldown = update.fire_cooldown;
    craft.speed = update.speed;
    if let CraftRole::Boss(state) = &mut craft.role {
        state.stage = update.new_stage;
    }
    tracing::debug!(stage = ?update.new_stage, hp = craft.hp, "boss stage changed");
    Some(update.new_stage)
}

fn shoot(body: &Body, craft: &Craft, ctx: &EnemyTickContext<'_>) -> Vec<Spawn> {
    match &craft.role {
        CraftRole::Elite => patterns::elite_volley(body),
        CraftRole::Boss(state) => patterns::boss_volley(state.stage, body, ctx.field, ctx.target),
        CraftRole::Normal | CraftRole::Player(_) => Vec::new(),
    }
}

/// Outcome of a craft's death hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeathReport {
    /// `None` for the player.
    pub class: Option<EnemyClass>,
    pub score: u32,
    pub signal: GameSignal,
}

/// Death hook: enemies award their score, the boss also signals victory and
/// the player signals defeat.
pub fn on_death(craft: &Craft) -> DeathReport {
    match craft.enemy_class() {
        None => DeathReport {
            class: None,
            score: 0,
            signal: GameSignal::PlayerDefeated,
        },
        Some(class) => DeathReport {
            class: Some(class),
            score: craft.score_value,
            signal: if class == EnemyClass::Boss {
                GameSignal::BossDefeated
            } else {
                GameSignal::Continue
            },
        },
    }
}
