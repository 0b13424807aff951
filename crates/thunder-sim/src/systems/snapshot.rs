//! Snapshot system: reads the world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use thunder_core::components::Entity;
use thunder_core::constants::BOSS_HP;
use thunder_core::enums::*;
use thunder_core::events::GameEvent;
use thunder_core::state::*;
use thunder_core::types::{Playfield, SimTime};

use crate::score::ScoreState;
use crate::world::World;

/// Engine-level values that are not stored in the world.
pub struct SnapshotInputs<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub signal: GameSignal,
    pub field: &'a Playfield,
    pub spawn_phase: SpawnPhase,
    pub score: &'a ScoreState,
    pub clear_window: u32,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    inputs: &SnapshotInputs<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *inputs.time,
        phase: inputs.phase,
        signal: inputs.signal,
        playfield: *inputs.field,
        spawn_phase: inputs.spawn_phase,
        score: ScoreView {
            total: inputs.score.total,
            delta: inputs.score.tick_delta,
            enemies_destroyed: inputs.score.enemies_destroyed,
        },
        entities: world.iter().filter(|e| e.is_alive()).map(build_entity).collect(),
        player: build_player(world),
        boss: build_boss(world),
        clear_window_ticks: inputs.clear_window,
        events,
    }
}

fn build_entity(entity: &Entity) -> EntityView {
    EntityView {
        id: entity.id,
        kind: entity.render_kind(),
        x: entity.body.pos.x,
        y: entity.body.pos.y,
        width: entity.body.size.x,
        height: entity.body.size.y,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    let craft = world.player()?.craft()?;
    let state = craft.player_state()?;
    Some(PlayerView {
        hp: craft.hp,
        max_hp: state.max_hp,
        shield_ticks: state.shield_ticks,
        power_ticks: state.power_ticks,
        hit_cooldown_ticks: state.hit_cooldown,
    })
}

fn build_boss(world: &World) -> Option<BossView> {
    let craft = world.boss()?.craft()?;
    Some(BossView {
        hp: craft.hp,
        max_hp: BOSS_HP,
        stage: craft.boss_state()?.stage,
    })
}
