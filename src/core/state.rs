//! Game state: the seats, their chips, the turn counter and the center pool.
//!
//! The state is allocated once per table configuration and reset in place
//! between games. Chip movement goes through `transfer`, which keeps
//! `seated chips + center pool == num_players * starting_chips`.

use serde::{Deserialize, Serialize};

use super::config::TableConfig;
use super::player::{Player, SeatId, SeatMap};

/// Where a chip goes when it leaves the active player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Another seat at the table.
    Seat(SeatId),
    /// The center pool; the chip is out of play.
    Pool,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    seats: SeatMap<Player>,

    /// Completed turns since the last reset.
    turns: u32,

    /// Chips removed from play.
    center_pool: u32,

    starting_chips: u32,
}

impl GameState {
    /// Create a freshly reset state for a validated table.
    #[must_use]
    pub fn new(config: &TableConfig) -> Self {
        Self {
            seats: SeatMap::new(config.num_players, |seat| {
                Player::new(seat, config.starting_chips, config.strategy_for(seat))
            }),
            turns: 0,
            center_pool: 0,
            starting_chips: config.starting_chips,
        }
    }

    /// Restore every seat to its starting chips and clear the counters.
    ///
    /// Seats are reset in place; strategies are kept.
    pub fn reset(&mut self) {
        let starting = self.starting_chips;
        for (_, player) in self.seats.iter_mut() {
            player.chips = starting;
        }
        self.turns = 0;
        self.center_pool = 0;
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.seat_count()
    }

    /// Completed turns since the last reset.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Chips in the center pool.
    #[must_use]
    pub fn center_pool(&self) -> u32 {
        self.center_pool
    }

    /// The seat whose turn is next: seats take turns in order from seat 0,
    /// including seats that hold no chips.
    #[must_use]
    pub fn active_seat(&self) -> SeatId {
        SeatId((self.turns as usize % self.seat_count()) as u8)
    }

    /// A player's record.
    #[must_use]
    pub fn player(&self, seat: SeatId) -> &Player {
        &self.seats[seat]
    }

    /// Chips held by `seat`.
    #[must_use]
    pub fn chips(&self, seat: SeatId) -> u32 {
        self.seats[seat].chips
    }

    /// Chip counts in seat order.
    #[must_use]
    pub fn chip_counts(&self) -> Vec<u32> {
        self.seats.values().map(|p| p.chips).collect()
    }

    /// Iterate over players in seat order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.seats.values()
    }

    /// Seated chips plus the center pool.
    #[must_use]
    pub fn total_chips(&self) -> u64 {
        self.seats.values().map(|p| u64::from(p.chips)).sum::<u64>() + u64::from(self.center_pool)
    }

    /// The chips this table started with.
    #[must_use]
    pub fn expected_total(&self) -> u64 {
        self.seat_count() as u64 * u64::from(self.starting_chips)
    }

    /// The sole seat still holding chips, once every other seat is empty.
    #[must_use]
    pub fn winner(&self) -> Option<SeatId> {
        let mut holder = None;
        let mut empty = 0;
        for (seat, player) in self.seats.iter() {
            if player.is_out() {
                empty += 1;
            } else {
                holder = Some(seat);
            }
        }
        if empty == self.seat_count() - 1 {
            holder
        } else {
            None
        }
    }

    /// Whether exactly one seat still holds chips.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// Move one chip from `from` to `to`.
    ///
    /// # Panics
    ///
    /// If `from` holds no chips or `to` is `from`: both mean the engine
    /// resolved an impossible move.
    pub fn transfer(&mut self, from: SeatId, to: Target) {
        assert!(
            self.seats[from].chips > 0,
            "impossible state: {from} has no chip to pass"
        );
        match to {
            Target::Seat(seat) => {
                assert!(
                    seat != from && seat.index() < self.seat_count(),
                    "impossible state: {from} cannot pass to {seat}"
                );
                self.seats[seat].chips += 1;
            }
            Target::Pool => self.center_pool += 1,
        }
        self.seats[from].chips -= 1;
    }

    /// Mark the active player's turn as finished.
    pub(crate) fn end_turn(&mut self) {
        self.turns += 1;
    }

    /// Overwrite chip counts, for setting up positions in tests and tools.
    ///
    /// # Panics
    ///
    /// If `chips` does not have one entry per seat.
    pub fn set_chips(&mut self, chips: &[u32]) {
        assert_eq!(chips.len(), self.seat_count(), "one chip count per seat");
        for ((_, player), &count) in self.seats.iter_mut().zip(chips) {
            player.chips = count;
        }
    }
}
