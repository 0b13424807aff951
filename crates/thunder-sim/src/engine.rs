//! Simulation engine: the world tick orchestrator.
//!
//! `SimulationEngine` owns the entity world, processes commands, runs all
//! systems in a fixed order, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use thunder_ai::behavior::DeathReport;
use thunder_core::commands::{InputState, PlayerCommand};
use thunder_core::components::{EntityId, Spawn};
use thunder_core::config::{validate_playfield, SimConfig};
use thunder_core::enums::{EnemyClass, GamePhase, GameSignal, SpawnPhase};
use thunder_core::error::ConfigError;
use thunder_core::events::GameEvent;
use thunder_core::state::GameStateSnapshot;
use thunder_core::types::{Playfield, SimTime};

use crate::score::ScoreState;
use crate::systems;
use crate::systems::enemy_spawner::EnemySpawner;
use crate::systems::item_spawner::ItemSpawner;
use crate::systems::snapshot::SnapshotInputs;
use crate::systems::update::UpdateContext;
use crate::world::World;
use crate::world_setup;

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    signal: GameSignal,
    field: Playfield,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    input: InputState,
    enemy_spawner: EnemySpawner,
    item_spawner: ItemSpawner,
    score: ScoreState,
    /// Ticks left in which freshly spawned enemy bullets are discarded.
    clear_window: u32,
    spawn_buffer: Vec<Spawn>,
    despawn_buffer: Vec<EntityId>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::debug!(seed = config.seed, "simulation configured");
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            signal: GameSignal::default(),
            field: config.playfield,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            input: InputState::default(),
            enemy_spawner: EnemySpawner::new(config.spawn.clone()),
            item_spawner: ItemSpawner::new(config.items.clone()),
            score: ScoreState::default(),
            clear_window: 0,
            spawn_buffer: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Set the input polled on the next tick. Held until replaced.
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();
        self.signal = GameSignal::Continue;

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &SnapshotInputs {
                time: &self.time,
                phase: self.phase,
                signal: self.signal,
                field: &self.field,
                spawn_phase: self.enemy_spawner.phase(),
                score: &self.score,
                clear_window: self.clear_window,
            },
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Outcome of the most recent tick.
    pub fn signal(&self) -> GameSignal {
        self.signal
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn playfield(&self) -> Playfield {
        self.field
    }

    pub fn spawn_phase(&self) -> SpawnPhase {
        self.enemy_spawner.phase()
    }

    pub fn clear_window(&self) -> u32 {
        self.clear_window
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Mutable world access for tests that stage scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn score_mut(&mut self) -> &mut ScoreState {
        &mut self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if matches!(
                    self.phase,
                    GamePhase::Menu | GamePhase::Success | GamePhase::Fail
                ) {
                    self.reset_run();
                    self.phase = GamePhase::Running;
                    tracing::info!(seed = self.config.seed, "run started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Running => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Running,
                _ => {}
            },
            PlayerCommand::ReturnToMenu => {
                self.world.clear();
                self.phase = GamePhase::Menu;
            }
            PlayerCommand::Resize { width, height } => {
                let field = Playfield::new(width, height);
                match validate_playfield(&field) {
                    Ok(()) => {
                        self.field = field;
                        world_setup::clamp_player(&mut self.world, &self.field);
                    }
                    Err(e) => tracing::warn!(%e, "resize rejected"),
                }
            }
        }
    }

    /// Fresh world, score and spawners for a new run.
    fn reset_run(&mut self) {
        world_setup::setup_run(&mut self.world, &self.field, &self.config.player);
        self.enemy_spawner = EnemySpawner::new(self.config.spawn.clone());
        self.item_spawner = ItemSpawner::new(self.config.items.clone());
        self.score.reset();
        self.clear_window = 0;
        self.time = SimTime::default();
        self.spawn_buffer.clear();
        self.events.clear();
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        self.score.begin_tick();

        // 1. Enemy spawning (phase from score, ceiling, cooldowns)
        systems::enemy_spawner::run(
            &mut self.world,
            &mut self.enemy_spawner,
            &self.field,
            self.score.total,
            &mut self.rng,
            &mut self.events,
        );
        // 2. Item spawning
        let boss_fight = self.world.boss().is_some();
        self.item_spawner.run(
            &mut self.world,
            &self.field,
            boss_fight,
            &mut self.rng,
            &mut self.events,
        );
        // 3. Player fire request
        systems::player::fire(&mut self.world, &self.input);
        // 4. Collision resolution
        let deaths = systems::collision::run(
            &mut self.world,
            &self.config.items,
            &mut self.clear_window,
            &mut self.events,
        );
        self.settle_deaths(deaths);
        // 5. Per-entity update (movement, AI, cooldowns, lifetimes)
        let ctx = UpdateContext {
            field: &self.field,
            input: &self.input,
            target: self.world.player_center(),
        };
        systems::update::run(
            &mut self.world,
            &ctx,
            &mut self.spawn_buffer,
            &mut self.events,
        );
        // 6. Merge buffered spawns
        self.merge_spawns();
        // 7. Cleanup
        let removed = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 8. Bookkeeping
        self.clear_window = self.clear_window.saturating_sub(1);
        self.apply_signal();

        tracing::trace!(
            tick = self.time.tick,
            entities = self.world.len(),
            enemies = self.world.alive_enemy_count(),
            removed,
            "tick complete"
        );
    }

    /// Award score and record outcome signals for crafts destroyed this tick.
    fn settle_deaths(&mut self, deaths: Vec<DeathReport>) {
        for report in deaths {
            match report.class {
                Some(class) => {
                    self.score.award(report.score);
                    self.events.push(GameEvent::ScoreAwarded {
                        class,
                        points: report.score,
                    });
                    if class == EnemyClass::Boss {
                        self.events.push(GameEvent::BossDefeated);
                    }
                }
                None => self.events.push(GameEvent::PlayerDefeated),
            }
            self.raise_signal(report.signal);
        }
    }

    /// Player defeat outranks boss defeat when both land in the same tick.
    fn raise_signal(&mut self, signal: GameSignal) {
        self.signal = match (self.signal, signal) {
            (GameSignal::PlayerDefeated, _) | (_, GameSignal::PlayerDefeated) => {
                GameSignal::PlayerDefeated
            }
            (GameSignal::BossDefeated, _) | (_, GameSignal::BossDefeated) => {
                GameSignal::BossDefeated
            }
            _ => GameSignal::Continue,
        };
    }

    /// Append buffered spawns, discarding enemy bullets while the clear window is open.
    fn merge_spawns(&mut self) {
        for spawn in self.spawn_buffer.drain(..) {
            if self.clear_window > 0 && spawn.is_enemy_bullet() {
                continue;
            }
            self.world.spawn(spawn);
        }
    }

    fn apply_signal(&mut self) {
        match self.signal {
            GameSignal::Continue => {}
            GameSignal::PlayerDefeated => {
                self.phase = GamePhase::Fail;
                tracing::info!(score = self.score.total, "player defeated");
            }
            GameSignal::BossDefeated => {
                self.phase = GamePhase::Success;
                tracing::info!(score = self.score.total, "boss defeated");
            }
        }
    }
}
