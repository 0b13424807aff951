//! Enemy AI for Thunder.
//!
//! Implements enemy profiles, the boss stage state machine, shoot patterns
//! and the per-enemy tick update. Operates on plain entity data; spawned
//! bullets and score are returned to the caller rather than pushed anywhere.

pub mod behavior;
pub mod factory;
pub mod fsm;
pub mod patterns;
pub mod profiles;

pub use thunder_core as core;

#[cfg(test)]
mod tests;
