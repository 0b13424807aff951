//! Game loop thread: turns wall-clock time into whole simulation ticks.
//!
//! The engine is created before the thread starts so that a bad config is
//! reported to the caller, then moved in. Commands and input arrive over an
//! `mpsc` channel; each snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use thunder_core::config::SimConfig;
use thunder_core::constants::TICK_RATE;
use thunder_core::state::GameStateSnapshot;
use thunder_sim::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Most ticks run for a single wake-up. A larger backlog is dropped.
pub const MAX_CATCH_UP_TICKS: u32 = 8;

/// Fixed-step accumulator.
#[derive(Debug, Clone)]
pub struct TickClock {
    last: Instant,
    accumulator: Duration,
}

impl TickClock {
    pub fn new(now: Instant) -> Self {
        Self {
            last: now,
            accumulator: Duration::ZERO,
        }
    }

    /// Number of whole ticks owed at `now`. Leftover time carries over.
    pub fn advance(&mut self, now: Instant) -> u32 {
        self.accumulator += now.saturating_duration_since(self.last);
        self.last = now;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_CATCH_UP_TICKS {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }
        if self.accumulator >= TICK_DURATION {
            // Too far behind; reset to avoid a catch-up spiral.
            tracing::debug!(backlog = ?self.accumulator, "dropping tick backlog");
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    /// Time left until the next tick is owed.
    pub fn until_next(&self) -> Duration {
        TICK_DURATION.saturating_sub(self.accumulator)
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the driver to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> anyhow::Result<mpsc::Sender<GameLoopCommand>> {
    let engine = SimulationEngine::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("thunder-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut clock = TickClock::new(Instant::now());

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Input(input)) => engine.set_input(input),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Run the ticks the wall clock owes (engine handles pause internally)
        for _ in 0..clock.advance(Instant::now()) {
            let snapshot = engine.tick();
            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = Some(snapshot);
            }
        }

        // 3. Sleep until the next tick is due
        std::thread::sleep(clock.until_next());
    }
}
