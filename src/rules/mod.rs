//! Game rules: chip targets, strategies and the game engine.
//!
//! `GameEngine` is the only stateful piece. It exposes two entry points to
//! its caller: `reset_game` to (re)configure the table and `play_game` to
//! run one game to completion. `take_turn` is public for step-by-step
//! inspection.

pub mod engine;
pub mod target;

pub use engine::{DieResult, GameEngine, GameOutcome, TurnReport};
pub use target::{across_candidates, resolve_target};
