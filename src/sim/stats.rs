//! Caller-owned statistics over many games.

use serde::{Deserialize, Serialize};

use crate::core::{SeatId, SeatMap};
use crate::rules::GameOutcome;

/// Turn counts and win tallies accumulated one game at a time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Games recorded.
    pub games: u64,

    /// Sum of turns over all games.
    pub total_turns: u64,

    /// Running mean of turns per game, updated incrementally.
    pub mean_turns: f64,

    /// Shortest game seen.
    pub min_turns: Option<u32>,

    /// Longest game seen.
    pub max_turns: Option<u32>,

    /// Wins per seat.
    pub wins: SeatMap<u64>,
}

impl SimulationStats {
    /// Create empty statistics for a table of `seat_count` seats.
    pub fn new(seat_count: usize) -> Self {
        Self {
            games: 0,
            total_turns: 0,
            mean_turns: 0.0,
            min_turns: None,
            max_turns: None,
            wins: SeatMap::with_value(seat_count, 0),
        }
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::new(self.wins.seat_count());
    }

    /// Fold one finished game in.
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        self.total_turns += u64::from(outcome.turns);
        self.mean_turns += (f64::from(outcome.turns) - self.mean_turns) / self.games as f64;
        self.min_turns = Some(self.min_turns.map_or(outcome.turns, |m| m.min(outcome.turns)));
        self.max_turns = Some(self.max_turns.map_or(outcome.turns, |m| m.max(outcome.turns)));
        self.wins[outcome.winner] += 1;
    }

    /// Fold another batch for the same table in.
    ///
    /// # Panics
    ///
    /// If the two batches were collected on tables of different sizes.
    pub fn merge(&mut self, other: &SimulationStats) {
        assert_eq!(
            self.wins.seat_count(),
            other.wins.seat_count(),
            "cannot merge statistics from different tables"
        );
        if other.games == 0 {
            return;
        }
        if self.games == 0 {
            self.clone_from(other);
            return;
        }
        let games = self.games + other.games;
        let weighted = self.mean_turns * self.games as f64 + other.mean_turns * other.games as f64;
        self.mean_turns = weighted / games as f64;
        self.games = games;
        self.total_turns += other.total_turns;
        self.min_turns = match (self.min_turns, other.min_turns) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_turns = match (self.max_turns, other.max_turns) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        for (seat, wins) in self.wins.iter_mut() {
            *wins += other.wins[seat];
        }
    }

    /// Fraction of recorded games won by `seat`.
    #[must_use]
    pub fn win_rate(&self, seat: SeatId) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins[seat] as f64 / self.games as f64
        }
    }

    /// Mean turns computed from the exact total rather than the running mean.
    #[must_use]
    pub fn exact_mean_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }
}
