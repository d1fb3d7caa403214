//! Seat identification, per-seat storage, and the player record.
//!
//! ## SeatId
//!
//! Type-safe seat identifier supporting 2-255 seats around a circular table.
//!
//! ## SeatMap
//!
//! Per-seat storage with O(1) access, backed by an inline `SmallVec` so
//! typical tables never touch the heap.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::config::Strategy;

/// Seats stored inline before a `SeatMap` spills to the heap.
const INLINE_SEATS: usize = 8;

/// Seat identifier supporting up to 255 seats.
///
/// Seats are 0-based and numbered clockwise: the first seat is `SeatId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat `steps` positions clockwise on a table of `seat_count`.
    #[must_use]
    pub fn offset(self, steps: usize, seat_count: usize) -> Self {
        Self(((self.index() + steps) % seat_count) as u8)
    }

    /// The neighbor to the left (one seat counter-clockwise).
    #[must_use]
    pub fn left(self, seat_count: usize) -> Self {
        self.offset(seat_count - 1, seat_count)
    }

    /// The neighbor to the right (one seat clockwise).
    #[must_use]
    pub fn right(self, seat_count: usize) -> Self {
        self.offset(1, seat_count)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use lrc_sim::core::{SeatId, SeatMap};
///
/// let mut wins: SeatMap<u64> = SeatMap::with_value(5, 0);
/// wins[SeatId::new(2)] += 1;
/// assert_eq!(wins[SeatId::new(2)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: SmallVec<[T; INLINE_SEATS]>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(seat_count: usize, factory: impl Fn(SeatId) -> T) -> Self {
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = (0..seat_count as u8).map(|i| factory(SeatId(i))).collect();
        Self { data }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(seat_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(seat_count, |_| value.clone())
    }

    /// Get the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (SeatId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over (SeatId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SeatId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// One player at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat position, stable for the duration of a game.
    pub index: SeatId,

    /// Chips currently held.
    pub chips: u32,

    /// Tie-break between the two across seats on an odd table.
    pub strategy: Strategy,
}

impl Player {
    /// Create a player at `index` holding `chips`.
    #[must_use]
    pub fn new(index: SeatId, chips: u32, strategy: Strategy) -> Self {
        Self { index, chips, strategy }
    }

    /// Dice rolled this turn: one per chip, capped at `max_dice`.
    #[must_use]
    pub fn dice_to_roll(&self, max_dice: u32) -> u32 {
        self.chips.min(max_dice)
    }

    /// Whether the player currently holds no chips.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.chips == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_basics() {
        let s0 = SeatId::new(0);
        let s1 = SeatId::new(1);

        assert_eq!(s0.index(), 0);
        assert_eq!(s1.index(), 1);
        assert_eq!(format!("{}", s0), "Player 0");
    }

    #[test]
    fn test_seat_neighbors_wrap() {
        let n = 5;
        assert_eq!(SeatId::new(0).left(n), SeatId::new(4));
        assert_eq!(SeatId::new(0).right(n), SeatId::new(1));
        assert_eq!(SeatId::new(4).right(n), SeatId::new(0));
        assert_eq!(SeatId::new(3).offset(3, n), SeatId::new(1));
    }

    #[test]
    fn test_two_seat_neighbors_coincide() {
        let s0 = SeatId::new(0);
        assert_eq!(s0.left(2), SeatId::new(1));
        assert_eq!(s0.right(2), SeatId::new(1));
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<u32> = SeatMap::new(4, |s| s.index() as u32 * 10);

        assert_eq!(map[SeatId::new(0)], 0);
        assert_eq!(map[SeatId::new(3)], 30);
        assert_eq!(map.seat_count(), 4);
    }

    #[test]
    fn test_seat_map_mutation_and_iter() {
        let mut map: SeatMap<u32> = SeatMap::with_value(3, 0);
        for (seat, value) in map.iter_mut() {
            *value = seat.index() as u32 + 1;
        }

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(SeatId::new(0), &1), (SeatId::new(1), &2), (SeatId::new(2), &3)]);
        assert_eq!(map.values().sum::<u32>(), 6);
    }

    #[test]
    fn test_seat_map_spills_past_inline() {
        let map: SeatMap<u32> = SeatMap::with_value(12, 7);
        assert_eq!(map.seat_count(), 12);
        assert_eq!(map[SeatId::new(11)], 7);
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<u32> = SeatMap::new(2, |s| s.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_dice_capped_at_three() {
        let mut player = Player::new(SeatId::new(0), 0, Strategy::default());
        assert_eq!(player.dice_to_roll(3), 0);
        assert!(player.is_out());

        player.chips = 2;
        assert_eq!(player.dice_to_roll(3), 2);

        player.chips = 7;
        assert_eq!(player.dice_to_roll(3), 3);
    }
}
