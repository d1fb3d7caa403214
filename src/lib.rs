//! # lrc-sim
//!
//! A Monte-Carlo simulator for the dice game Left-Right-Center.
//!
//! ## Design Principles
//!
//! 1. **One Engine**: a single engine parameterized by player count,
//!    starting chips, per-seat strategy and the center rule.
//!
//! 2. **Injected Randomness**: every draw goes through `RandomSource`, so a
//!    seeded ChaCha8 stream or a scripted source can drive the same engine.
//!
//! 3. **Caller-Owned Statistics**: the engine reports one `GameOutcome` per
//!    game and keeps no totals; aggregation lives in `sim`.
//!
//! ## Modules
//!
//! - `core`: Seats, players, state, configuration, RNG, errors
//! - `dice`: The six-faced LRC die
//! - `rules`: Chip targets, across strategies, the game engine
//! - `sim`: Statistics, batch runner, strategy sweep
//!
//! ## Example
//!
//! ```
//! use lrc_sim::{run, CenterRule, SimulationConfig, TableConfig};
//!
//! let table = TableConfig::new(5, 3);
//! assert_eq!(table.center_rule, CenterRule::Pot);
//!
//! let report = run(&table, &SimulationConfig::new().with_games(200)).unwrap();
//! assert_eq!(report.stats.games, 200);
//! ```

pub mod core;
pub mod dice;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    CenterRule, ConfigError, Error, GameRng, GameState, Player, RandomSource, Result,
    ScriptedSource, SeatId, SeatMap, Strategy, TableConfig, Target,
};

pub use crate::dice::{Die, Outcome};

pub use crate::rules::{DieResult, GameEngine, GameOutcome, TurnReport};

pub use crate::sim::{
    play_games, run, sweep_strategies, SimulationConfig, SimulationReport, SimulationStats,
    SweepEntry,
};
