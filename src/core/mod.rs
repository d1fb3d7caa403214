//! Core table types: seats, players, state, configuration, RNG, errors.
//!
//! This module holds the data the engine mutates. Game rules live in
//! `rules`; the die lives in `dice`.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{CenterRule, Strategy, TableConfig, MAX_DICE, MAX_PLAYERS};
pub use error::{ConfigError, Error, ParseEnumError, Result};
pub use player::{Player, SeatId, SeatMap};
pub use rng::{GameRng, RandomSource, ScriptedSource, DIE_FACES};
pub use state::{GameState, Target};
