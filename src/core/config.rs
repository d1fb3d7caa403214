//! Table configuration types.
//!
//! Callers configure a table by providing:
//! - `num_players` and `starting_chips`
//! - optionally one `Strategy` per seat (defaults to `RandomPick`)
//! - the `CenterRule` deciding where Center chips go
//!
//! `TableConfig::validate` is the single place configuration is checked;
//! the engine refuses to reset onto a table that fails it.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ParseEnumError};
use super::player::SeatId;

/// Dice rolled per turn by a player holding at least this many chips.
pub const MAX_DICE: u32 = 3;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 255;

/// How a player picks between the two seats flanking the opposite point of
/// an odd-sized table when rolling Center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Fair coin between the two candidates.
    #[default]
    RandomPick,
    /// Always the left-of-center candidate.
    PreferLeft,
    /// Always the right-of-center candidate.
    PreferRight,
    /// The candidate holding strictly more chips; ties go right.
    PreferRicher,
    /// The candidate holding strictly fewer chips; ties go right.
    PreferPoorer,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 5] = [
        Strategy::RandomPick,
        Strategy::PreferLeft,
        Strategy::PreferRight,
        Strategy::PreferRicher,
        Strategy::PreferPoorer,
    ];

    /// Stable lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::RandomPick => "random",
            Strategy::PreferLeft => "left",
            Strategy::PreferRight => "right",
            Strategy::PreferRicher => "richer",
            Strategy::PreferPoorer => "poorer",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == lowered)
            .ok_or_else(|| ParseEnumError {
                kind: "strategy",
                value: s.to_string(),
                expected: "random, left, right, richer, poorer",
            })
    }
}

/// Where a Center roll sends its chip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterRule {
    /// To the seat across the table. Even tables have one such seat; odd
    /// tables have two candidates and the roller's `Strategy` decides.
    ///
    /// Chips never leave the table, so only games of two or three seats
    /// finish reliably. Four seats can take tens of thousands of turns and
    /// five seats often run past 100,000.
    Across,
    /// Into the center pool, out of play for the rest of the game.
    #[default]
    Pot,
}

impl std::fmt::Display for CenterRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CenterRule::Across => f.write_str("across"),
            CenterRule::Pot => f.write_str("pot"),
        }
    }
}

impl std::str::FromStr for CenterRule {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "across" => Ok(CenterRule::Across),
            "pot" => Ok(CenterRule::Pot),
            _ => Err(ParseEnumError {
                kind: "center rule",
                value: s.to_string(),
                expected: "across, pot",
            }),
        }
    }
}

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of seats (2-255).
    pub num_players: usize,

    /// Chips each seat holds after a reset (at least 1).
    pub starting_chips: u32,

    /// One strategy per seat. `None` means every seat plays `RandomPick`.
    pub strategies: Option<Vec<Strategy>>,

    /// Where Center chips go.
    pub center_rule: CenterRule,
}

impl TableConfig {
    /// Create a table of `num_players` seats with `starting_chips` each.
    ///
    /// Nothing is checked here; see `validate`.
    pub fn new(num_players: usize, starting_chips: u32) -> Self {
        Self {
            num_players,
            starting_chips,
            strategies: None,
            center_rule: CenterRule::default(),
        }
    }

    /// Set one strategy per seat.
    #[must_use]
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = Some(strategies);
        self
    }

    /// Give every seat the same strategy.
    #[must_use]
    pub fn with_uniform_strategy(mut self, strategy: Strategy) -> Self {
        self.strategies = Some(vec![strategy; self.num_players]);
        self
    }

    /// Set the center rule.
    #[must_use]
    pub fn with_center_rule(mut self, rule: CenterRule) -> Self {
        self.center_rule = rule;
        self
    }

    /// Replace one seat's strategy, filling the others with the default.
    #[must_use]
    pub fn with_seat_strategy(mut self, seat: SeatId, strategy: Strategy) -> Self {
        let seats = self.num_players;
        let strategies = self
            .strategies
            .get_or_insert_with(|| vec![Strategy::default(); seats]);
        if let Some(slot) = strategies.get_mut(seat.index()) {
            *slot = strategy;
        }
        self
    }

    /// Check the configuration describes a playable table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_players < 2 {
            return Err(ConfigError::TooFewPlayers(self.num_players));
        }
        if self.num_players > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                got: self.num_players,
                max: MAX_PLAYERS,
            });
        }
        if self.starting_chips < 1 {
            return Err(ConfigError::NoStartingChips);
        }
        if let Some(strategies) = &self.strategies {
            if strategies.len() != self.num_players {
                return Err(ConfigError::StrategyCountMismatch {
                    expected: self.num_players,
                    got: strategies.len(),
                });
            }
        }
        Ok(())
    }

    /// The strategy played from `seat`.
    #[must_use]
    pub fn strategy_for(&self, seat: SeatId) -> Strategy {
        self.strategies
            .as_ref()
            .and_then(|s| s.get(seat.index()).copied())
            .unwrap_or_default()
    }

    /// Chips in play at the start of every game.
    #[must_use]
    pub fn total_chips(&self) -> u64 {
        self.num_players as u64 * u64::from(self.starting_chips)
    }

    /// Whether the strategy can ever be consulted on this table.
    #[must_use]
    pub fn strategies_matter(&self) -> bool {
        self.center_rule == CenterRule::Across && self.num_players % 2 == 1
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(5, 3)
    }
}
