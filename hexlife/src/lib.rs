// lib.rs - Life-like cellular automaton on a hex-offset grid
//
// Living cells survive with 2 or 3 living neighbors and die otherwise. Dead
// cells revive with exactly 3 living neighbors, or after 6 consecutive dead
// generations. Every 4th generation one random dead cell is sparked back to
// life.
//
// `engine::step` advances a `Grid` by one generation; `Simulation` wraps it
// with a seeded random source and restarts the grid after extinction.

pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod layout;
pub mod patterns;
pub mod rule;
pub mod simulation;

// Re-export main types
pub use cell::{Cell, DeathCause};
pub use config::Config;
pub use engine::{step, StepReport};
pub use error::ConfigError;
pub use grid::Grid;
pub use simulation::Simulation;
