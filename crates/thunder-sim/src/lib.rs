//! Simulation engine for Thunder.
//!
//! Owns the entity world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for a renderer.

pub mod engine;
pub mod score;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use thunder_core as core;
