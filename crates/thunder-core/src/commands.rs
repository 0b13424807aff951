//! Commands and input sent from the enclosing application to the simulation.
//!
//! Commands are queued and applied at the next tick boundary. Input is polled
//! once per tick before collision resolution.

use serde::{Deserialize, Serialize};

/// Application-level actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a fresh run from the menu or an end screen.
    StartRun,
    /// Pause a running game.
    Pause,
    /// Resume a paused game.
    Resume,
    /// Flip between running and paused.
    TogglePause,
    /// Leave the current run and go back to the menu.
    ReturnToMenu,
    /// Change the playfield size.
    Resize { width: f64, height: f64 },
}

/// Directional and fire intents for the player craft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub firing: bool,
}

impl InputState {
    /// Unnormalised direction: each axis in {-1, 0, 1}, y grows downward.
    pub fn direction(&self) -> (f64, f64) {
        let dx = f64::from(i8::from(self.right) - i8::from(self.left));
        let dy = f64::from(i8::from(self.down) - i8::from(self.up));
        (dx, dy)
    }

    pub fn is_moving(&self) -> bool {
        let (dx, dy) = self.direction();
        dx != 0.0 || dy != 0.0
    }
}
