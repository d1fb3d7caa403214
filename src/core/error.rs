//! Error types.
//!
//! The engine performs no I/O and has no transient failures. The only
//! caller-visible error is an invalid table, reported before any state
//! changes. Broken engine invariants panic instead of returning errors.

use thiserror::Error;

/// Why a `TableConfig` cannot be played.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least 2 players are required (got {0})")]
    TooFewPlayers(usize),
    #[error("too many players (got={got}, max={max})")]
    TooManyPlayers { got: usize, max: usize },
    #[error("starting chips must be at least 1")]
    NoStartingChips,
    #[error("strategy count does not match player count (expected={expected}, got={got})")]
    StrategyCountMismatch { expected: usize, got: usize },
    #[error("seat {seat} is not at the table (players={num_players})")]
    SeatOutOfRange { seat: usize, num_players: usize },
}

/// Crate-level error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// Result alias for fallible engine and batch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A string did not name a known variant.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
