//! Application state shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail};

use thunder_core::commands::{InputState, PlayerCommand};
use thunder_core::config::SimConfig;
use thunder_core::state::GameStateSnapshot;

use crate::game_loop;

/// Messages sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Replace the input polled on every following tick.
    Input(InputState),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// `mpsc::Sender` is not `Sync`, so it sits behind a `Mutex`; the latest
/// snapshot is shared with the game loop thread through an `Arc`.
pub struct AppState {
    /// `None` until [`AppState::start_simulation`] is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread unless one is already running.
    pub fn start_simulation(&self, config: SimConfig) -> anyhow::Result<()> {
        let mut running = self.running.lock().map_err(|e| anyhow!("{e}"))?;
        if *running {
            bail!("simulation already running");
        }

        let cmd_tx = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())?;

        let mut tx_lock = self.command_tx.lock().map_err(|e| anyhow!("{e}"))?;
        *tx_lock = Some(cmd_tx);
        *running = true;
        Ok(())
    }

    pub fn send_command(&self, command: PlayerCommand) -> anyhow::Result<()> {
        self.send(GameLoopCommand::Player(command))
    }

    pub fn set_input(&self, input: InputState) -> anyhow::Result<()> {
        self.send(GameLoopCommand::Input(input))
    }

    /// Latest published snapshot, if any tick has run.
    pub fn snapshot(&self) -> anyhow::Result<Option<GameStateSnapshot>> {
        let lock = self.latest_snapshot.lock().map_err(|e| anyhow!("{e}"))?;
        Ok(lock.clone())
    }

    /// Stop the game loop. A no-op when it was never started.
    pub fn shutdown(&self) -> anyhow::Result<()> {
        // Same lock order as `start_simulation`.
        let mut running = self.running.lock().map_err(|e| anyhow!("{e}"))?;
        let mut tx_lock = self.command_tx.lock().map_err(|e| anyhow!("{e}"))?;
        if let Some(tx) = tx_lock.take() {
            // The thread may already be gone; that is the state we want anyway.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        *running = false;
        Ok(())
    }

    fn send(&self, command: GameLoopCommand) -> anyhow::Result<()> {
        let tx_lock = self.command_tx.lock().map_err(|e| anyhow!("{e}"))?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| anyhow!("failed to send command: {e}")),
            None => bail!("simulation not started"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(state.send_command(PlayerCommand::StartRun).is_err());
        assert!(state.set_input(InputState::default()).is_err());
        assert!(state.shutdown().is_ok());
    }

    #[test]
    fn test_start_rejects_invalid_config() {
        let state = AppState::new();
        let mut config = SimConfig::default();
        config.spawn.enemy_ceiling = 0;
        assert!(state.start_simulation(config).is_err());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_double_start_rejected() {
        let state = AppState::new();
        state.start_simulation(SimConfig::default()).unwrap();
        assert!(state.start_simulation(SimConfig::default()).is_err());
        state.shutdown().unwrap();
        assert!(!*state.running.lock().unwrap());
    }
}
