//! Per-entity update system.
//!
//! Every live entity is advanced exactly once. Bullets fired during the pass
//! are buffered by the caller and merged only after the pass completes.

use glam::DVec2;

use thunder_ai::behavior::{self, EnemyTickContext};
use thunder_core::commands::InputState;
use thunder_core::components::{Body, EntityKind, Motion, Spawn};
use thunder_core::events::GameEvent;
use thunder_core::trajectory::{self, Kinematics, StepContext};
use thunder_core::types::Playfield;

use crate::systems::player;
use crate::world::World;

/// Read-only inputs for the update pass.
pub struct UpdateContext<'a> {
    pub field: &'a Playfield,
    pub input: &'a InputState,
    /// Homing target captured at the start of the pass.
    pub target: Option<DVec2>,
}

pub fn run(
    world: &mut World,
    ctx: &UpdateContext<'_>,
    spawn_buffer: &mut Vec<Spawn>,
    events: &mut Vec<GameEvent>,
) {
    let enemy_ctx = EnemyTickContext {
        field: ctx.field,
        target: &ctx.target,
    };

    for entity in world.iter_mut() {
        if !entity.is_alive() {
            continue;
        }
        match &mut entity.kind {
            EntityKind::Craft(craft) if craft.is_player() => {
                player::steer(&mut entity.body, craft, ctx.input, ctx.field);
            }
            EntityKind::Craft(craft) => {
                let update = behavior::update_enemy(&mut entity.body, craft, &enemy_ctx);
                if let Some(stage) = update.stage_changed {
                    events.push(GameEvent::BossStageChanged { stage });
                }
                spawn_buffer.extend(update.spawned);
            }
            EntityKind::Bullet(bullet) => {
                advance(&mut entity.body, &mut bullet.motion, ctx);
                if ctx.field.is_fully_outside(entity.body.pos, entity.body.size) {
                    entity.body.kill();
                }
            }
            EntityKind::Item(item) => {
                // Items bounce and are never culled by bounds.
                advance(&mut entity.body, &mut item.motion, ctx);
            }
        }
    }
}

/// One trajectory step plus the lifetime count.
fn advance(body: &mut Body, motion: &mut Motion, ctx: &UpdateContext<'_>) {
    let step_ctx = StepContext {
        size: body.size,
        field: ctx.field,
        target: &ctx.target,
    };
    let next = trajectory::step(
        motion.trajectory.as_ref(),
        Kinematics::new(body.pos, motion.velocity),
        &step_ctx,
    );
    body.pos = next.pos;
    motion.velocity = next.vel;
    if motion.tick_life() {
        body.kill();
    }
}
