//! Render snapshot: the complete visible state handed out after each tick.
//!
//! A renderer draws from these views alone and never touches simulation
//! internals.

use serde::{Deserialize, Serialize};

use crate::components::EntityId;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Playfield, SimTime};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub signal: GameSignal,
    pub playfield: Playfield,
    pub spawn_phase: SpawnPhase,
    pub score: ScoreView,
    pub entities: Vec<EntityView>,
    pub player: Option<PlayerView>,
    pub boss: Option<BossView>,
    /// Ticks left in which new enemy bullets are discarded.
    pub clear_window_ticks: u32,
    pub events: Vec<GameEvent>,
}

/// One drawable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: RenderKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Player HUD values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub hp: i32,
    pub max_hp: i32,
    pub shield_ticks: u32,
    pub power_ticks: u32,
    pub hit_cooldown_ticks: u32,
}

/// Boss health bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossView {
    pub hp: i32,
    pub max_hp: i32,
    pub stage: BossStage,
}

/// Score for the current run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub total: u64,
    /// Points awarded during the tick that produced this snapshot.
    pub delta: u64,
    pub enemies_destroyed: u32,
}
