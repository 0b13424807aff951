//! Seeded headless runs driven by the autopilot.

use serde::Serialize;

use thunder_core::commands::PlayerCommand;
use thunder_core::config::SimConfig;
use thunder_core::enums::{BossStage, GamePhase, GameSignal, SpawnPhase};
use thunder_core::error::ConfigError;
use thunder_core::events::GameEvent;
use thunder_core::state::GameStateSnapshot;
use thunder_sim::SimulationEngine;

use crate::autopilot::Autopilot;

/// Outcome of a headless run, printed as JSON by the binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub phase: GamePhase,
    pub signal: GameSignal,
    pub spawn_phase: SpawnPhase,
    pub score: u64,
    pub enemies_destroyed: u32,
    pub player_hp: Option<i32>,
    pub boss_stage: Option<BossStage>,
    pub items_picked_up: u32,
    pub player_hits: u32,
}

/// Run a fresh game for at most `max_ticks` ticks, stopping early when the
/// run ends.
pub fn run_headless(config: SimConfig, max_ticks: u64) -> Result<RunSummary, ConfigError> {
    let seed = config.seed;
    let mut engine = SimulationEngine::new(config)?;
    let autopilot = Autopilot::new();
    let mut items_picked_up = 0;
    let mut player_hits = 0;

    engine.queue_command(PlayerCommand::StartRun);
    let mut snapshot = GameStateSnapshot::default();
    for _ in 0..max_ticks {
        snapshot = engine.tick();
        for event in &snapshot.events {
            match event {
                GameEvent::ItemPickedUp { .. } => items_picked_up += 1,
                GameEvent::PlayerHit { .. } => player_hits += 1,
                _ => {}
            }
        }
        if matches!(snapshot.phase, GamePhase::Success | GamePhase::Fail) {
            break;
        }
        engine.set_input(autopilot.decide(&snapshot));
    }

    tracing::info!(
        ticks = snapshot.time.tick,
        score = snapshot.score.total,
        phase = ?snapshot.phase,
        "headless run finished"
    );

    Ok(RunSummary {
        seed,
        ticks: snapshot.time.tick,
        phase: snapshot.phase,
        signal: snapshot.signal,
        spawn_phase: snapshot.spawn_phase,
        score: snapshot.score.total,
        enemies_destroyed: snapshot.score.enemies_destroyed,
        player_hp: snapshot.player.as_ref().map(|p| p.hp),
        boss_stage: snapshot.boss.as_ref().map(|b| b.stage),
        items_picked_up,
        player_hits,
    })
}
