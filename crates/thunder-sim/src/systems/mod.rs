//! Systems that operate on the simulation world each tick.
//!
//! Systems are functions that take `&mut World` (or `&World` for read-only).
//! Cross-tick state lives in the engine and is passed in by reference.

pub mod cleanup;
pub mod collision;
pub mod effects;
pub mod enemy_spawner;
pub mod item_spawner;
pub mod player;
pub mod snapshot;
pub mod update;
