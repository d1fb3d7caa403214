//! Many-game simulation on top of the engine.
//!
//! - `stats`: caller-owned running statistics
//! - `runner`: sequential and parallel batches, printable report
//! - `sweep`: rerun a batch once per strategy for one seat

pub mod runner;
pub mod stats;
pub mod sweep;

pub use runner::{play_games, run, SimulationConfig, SimulationReport};
pub use stats::SimulationStats;
pub use sweep::{sweep_strategies, SweepEntry};
