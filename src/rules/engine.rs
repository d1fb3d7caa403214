//! The single-game engine.
//!
//! ## Lifecycle
//!
//! `Reset` (every seat at starting chips, zero turns) → `InProgress` →
//! `Terminal` (one seat holds chips). Each `take_turn` makes exactly one
//! transition; termination is checked once per turn, never per die.
//!
//! ## Example
//!
//! ```
//! use lrc_sim::core::TableConfig;
//! use lrc_sim::rules::GameEngine;
//!
//! let mut engine = GameEngine::new(TableConfig::new(4, 3), 42).unwrap();
//! let outcome = engine.play_game();
//! assert!(outcome.turns >= 1);
//! assert!(engine.state().chips(outcome.winner) > 0);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::target::resolve_target;
use crate::core::{GameRng, GameState, RandomSource, Result, SeatId, TableConfig, Target, MAX_DICE};
use crate::dice::{Die, Outcome};

/// Result of one finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOutcome {
    /// The only seat left holding chips.
    pub winner: SeatId,
    /// Turns taken, counting turns of seats with no chips.
    pub turns: u32,
}

/// One die of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    pub outcome: Outcome,
    /// Where the chip went; `None` for a dot.
    pub target: Option<Target>,
}

/// What happened during one call to `take_turn`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The seat that took the turn.
    pub seat: SeatId,

    /// Dice in the order rolled. Empty for a seat with no chips.
    pub dice: SmallVec<[DieResult; MAX_DICE as usize]>,

    /// Set once the game is over.
    pub winner: Option<SeatId>,
}

impl TurnReport {
    /// Whether the game ended on (or before) this turn.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Chips that left the rolling seat this turn.
    #[must_use]
    pub fn chips_passed(&self) -> usize {
        self.dice.iter().filter(|d| d.outcome.passes_chip()).count()
    }
}

/// Plays Left-Right-Center games on one table.
///
/// The engine owns the table state and the die, and therefore its
/// randomness source. Statistics across games are the caller's business.
#[derive(Clone, Debug)]
pub struct GameEngine<R = GameRng> {
    config: TableConfig,
    state: GameState,
    die: Die<R>,
}

impl GameEngine<GameRng> {
    /// Create an engine with a seeded ChaCha8 source.
    pub fn new(config: TableConfig, seed: u64) -> Result<Self> {
        Self::with_source(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine drawing from `source`.
    ///
    /// Fails with `Error::InvalidConfiguration` if the table is unplayable.
    pub fn with_source(config: TableConfig, source: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(&config),
            config,
            die: Die::new(source),
        })
    }

    /// Reconfigure the table and reset it.
    ///
    /// On error the engine keeps its previous configuration and state.
    pub fn reset_game(&mut self, config: TableConfig) -> Result<()> {
        config.validate()?;
        self.state = GameState::new(&config);
        self.config = config;
        Ok(())
    }

    /// Play one game from a fresh reset to termination.
    pub fn play_game(&mut self) -> GameOutcome {
        self.state.reset();
        loop {
            if let Some(winner) = self.take_turn().winner {
                let outcome = GameOutcome {
                    winner,
                    turns: self.state.turns(),
                };
                debug!(winner = %outcome.winner, turns = outcome.turns, "game finished");
                return outcome;
            }
        }
    }

    /// Play the active seat's turn.
    ///
    /// The seat rolls one die per chip, at most three, and each Left, Right
    /// or Center moves one chip. A terminal state is left untouched.
    pub fn take_turn(&mut self) -> TurnReport {
        let seat = self.state.active_seat();
        if let Some(winner) = self.state.winner() {
            return TurnReport {
                seat,
                dice: SmallVec::new(),
                winner: Some(winner),
            };
        }

        let player = *self.state.player(seat);
        let rolls = player.dice_to_roll(MAX_DICE);
        let mut dice = SmallVec::new();

        for _ in 0..rolls {
            let outcome = self.die.roll();
            let target = resolve_target(
                outcome,
                seat,
                &self.state,
                player.strategy,
                self.config.center_rule,
                &mut self.die,
            );
            if let Some(target) = target {
                self.state.transfer(seat, target);
            }
            trace!(%seat, ?outcome, ?target, "die resolved");
            dice.push(DieResult { outcome, target });
        }

        self.state.end_turn();
        debug_assert_eq!(self.state.total_chips(), self.state.expected_total());

        TurnReport {
            seat,
            dice,
            winner: self.state.winner(),
        }
    }

    /// The current table state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The table configuration.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The randomness source.
    #[must_use]
    pub fn source(&self) -> &R {
        self.die.source()
    }
}
