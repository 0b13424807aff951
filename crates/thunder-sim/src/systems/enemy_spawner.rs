//! Enemy spawning system: cooldown-gated spawns and score-driven phases.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use thunder_ai::factory;
use thunder_ai::profiles::get_profile;
use thunder_core::components::EntityId;
use thunder_core::config::SpawnConfig;
use thunder_core::enums::{EnemyClass, SpawnPhase};
use thunder_core::events::GameEvent;
use thunder_core::types::Playfield;

use crate::world::World;

/// Per-run spawner state.
#[derive(Debug, Clone)]
pub struct EnemySpawner {
    config: SpawnConfig,
    normal_cooldown: u32,
    elite_cooldown: u32,
    phase: SpawnPhase,
    /// The most recently spawned boss.
    boss: Option<EntityId>,
}

impl EnemySpawner {
    pub fn new(config: SpawnConfig) -> Self {
        Self {
            config,
            normal_cooldown: 0,
            elite_cooldown: 0,
            phase: SpawnPhase::Normal,
            boss: None,
        }
    }

    pub fn phase(&self) -> SpawnPhase {
        self.phase
    }

    pub fn normal_cooldown(&self) -> u32 {
        self.normal_cooldown
    }

    pub fn elite_cooldown(&self) -> u32 {
        self.elite_cooldown
    }

    /// Move to the phase the score has earned. Never regresses.
    /// Returns the new phase when it changed.
    pub fn advance_phase(&mut self, score: u64) -> Option<SpawnPhase> {
        let earned = if score >= self.config.boss_score_threshold {
            SpawnPhase::Boss
        } else if score >= self.config.elite_score_threshold {
            SpawnPhase::Elite
        } else {
            SpawnPhase::Normal
        };
        if earned > self.phase {
            self.phase = earned;
            Some(earned)
        } else {
            None
        }
    }

    /// Spawn a rank-and-file enemy when its cooldown has run out.
    pub fn spawn_normal(
        &mut self,
        world: &mut World,
        field: &Playfield,
        rng: &mut ChaCha8Rng,
    ) -> Option<EntityId> {
        if self.normal_cooldown > 0 {
            self.normal_cooldown -= 1;
            return None;
        }
        self.normal_cooldown = self.config.normal_interval_ticks;
        Some(spawn_at_random_x(world, field, rng, EnemyClass::Normal))
    }

    /// Spawn an elite enemy when its cooldown has run out.
    pub fn spawn_elite(
        &mut self,
        world: &mut World,
        field: &Playfield,
        rng: &mut ChaCha8Rng,
    ) -> Option<EntityId> {
        if self.elite_cooldown > 0 {
            self.elite_cooldown -= 1;
            return None;
        }
        self.elite_cooldown = self.config.elite_interval_ticks;
        Some(spawn_at_random_x(world, field, rng, EnemyClass::Elite))
    }

    /// Spawn the boss unless the previous one is still alive.
    pub fn spawn_boss(&mut self, world: &mut World, field: &Playfield) -> Option<EntityId> {
        if self.boss.is_some_and(|id| world.is_alive(id)) {
            return None;
        }
        let id = world.spawn(factory::boss(field));
        self.boss = Some(id);
        Some(id)
    }
}

/// Enemy x is uniform over `[0, field width - enemy width]`.
fn spawn_at_random_x(
    world: &mut World,
    field: &Playfield,
    rng: &mut ChaCha8Rng,
    class: EnemyClass,
) -> EntityId {
    let max_x = (field.width - get_profile(class).size.x).max(0.0);
    let x = rng.gen_range(0.0..=max_x);
    world.spawn(factory::enemy(class, x))
}

/// Advance the phase from the current score, then spawn per the phase policy.
/// Spawning stops entirely while the enemy ceiling is reached.
pub fn run(
    world: &mut World,
    spawner: &mut EnemySpawner,
    field: &Playfield,
    score: u64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    if let Some(phase) = spawner.advance_phase(score) {
        tracing::info!(?phase, score, "spawner phase advanced");
        events.push(GameEvent::PhaseAdvanced { phase });
    }

    let ceiling = spawner.config.enemy_ceiling;

    match spawner.phase {
        SpawnPhase::Normal => {
            if world.alive_enemy_count() < ceiling {
                if let Some(id) = spawner.spawn_normal(world, field, rng) {
                    events.push(GameEvent::EnemySpawned {
                        id,
                        class: EnemyClass::Normal,
                    });
                }
            }
        }
        SpawnPhase::Elite => {
            if world.alive_enemy_count() < ceiling {
                if let Some(id) = spawner.spawn_elite(world, field, rng) {
                    events.push(GameEvent::EnemySpawned {
                        id,
                        class: EnemyClass::Elite,
                    });
                }
            }
            if world.alive_enemy_count() < ceiling {
                if let Some(id) = spawner.spawn_normal(world, field, rng) {
                    events.push(GameEvent::EnemySpawned {
                        id,
                        class: EnemyClass::Normal,
                    });
                }
            }
        }
        SpawnPhase::Boss => {
            if world.alive_enemy_count() < ceiling {
                if let Some(id) = spawner.spawn_boss(world, field) {
                    tracing::info!(id = id.0, "boss spawned");
                    events.push(GameEvent::BossSpawned { id });
                }
            }
        }
    }
}
