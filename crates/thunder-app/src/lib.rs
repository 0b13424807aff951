//! Thunder application driver.
//!
//! Wires the simulation crates to a fixed-tick game loop thread and a
//! scripted input source for headless runs.

pub mod autopilot;
pub mod game_loop;
pub mod headless;
pub mod state;

pub use thunder_core as core;
