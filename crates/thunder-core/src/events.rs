//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::components::EntityId;
use crate::enums::*;

/// Something noteworthy that happened during a tick. Drained into the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A rank-and-file or elite enemy entered the field.
    EnemySpawned { id: EntityId, class: EnemyClass },
    BossSpawned { id: EntityId },
    /// The spawner moved to a harder phase.
    PhaseAdvanced { phase: SpawnPhase },
    BossStageChanged { stage: BossStage },
    /// Points awarded for a destroyed enemy.
    ScoreAwarded { class: EnemyClass, points: u32 },
    ItemSpawned { id: EntityId, kind: ItemKind },
    ItemPickedUp { kind: ItemKind },
    /// A Clear pickup wiped the screen.
    ScreenCleared {
        bullets_removed: usize,
        enemies_removed: usize,
    },
    /// The player lost hit points.
    PlayerHit { damage: i32, hp: i32 },
    PlayerDefeated,
    BossDefeated,
}
