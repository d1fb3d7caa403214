//! Where a rolled chip goes.
//!
//! Left and Right are the neighbors. Center goes across the table: on an
//! even table that is the single opposite seat; on an odd table the
//! opposite point falls between two seats and the roller's `Strategy`
//! picks one. Under `CenterRule::Pot` Center goes to the pool instead.

use crate::core::{CenterRule, GameState, RandomSource, SeatId, Strategy, Target};
use crate::dice::{Die, Outcome};

/// The two seats flanking the point opposite `active`:
/// `(active + floor(n/2)) mod n` and `(active + ceil(n/2)) mod n`.
///
/// On an even table both are the same seat.
#[must_use]
pub fn across_candidates(active: SeatId, seat_count: usize) -> (SeatId, SeatId) {
    (
        active.offset(seat_count / 2, seat_count),
        active.offset(seat_count.div_ceil(2), seat_count),
    )
}

impl Strategy {
    /// Pick between the left-of-center and right-of-center seats.
    ///
    /// Only `RandomPick` draws from the die's source.
    pub fn choose<R: RandomSource>(
        self,
        left: SeatId,
        right: SeatId,
        state: &GameState,
        die: &mut Die<R>,
    ) -> SeatId {
        match self {
            Strategy::RandomPick => {
                if die.flip() {
                    left
                } else {
                    right
                }
            }
            Strategy::PreferLeft => left,
            Strategy::PreferRight => right,
            Strategy::PreferRicher => {
                if state.chips(left) > state.chips(right) {
                    left
                } else {
                    right
                }
            }
            Strategy::PreferPoorer => {
                if state.chips(left) < state.chips(right) {
                    left
                } else {
                    right
                }
            }
        }
    }
}

/// Resolve one die for the player in `active`.
///
/// Returns `None` for a dot. The strategy is consulted only for Center on
/// an odd table under `CenterRule::Across`; nothing else draws entropy.
pub fn resolve_target<R: RandomSource>(
    outcome: Outcome,
    active: SeatId,
    state: &GameState,
    strategy: Strategy,
    rule: CenterRule,
    die: &mut Die<R>,
) -> Option<Target> {
    let n = state.seat_count();
    match outcome {
        Outcome::Keep => None,
        Outcome::Left => Some(Target::Seat(active.left(n))),
        Outcome::Right => Some(Target::Seat(active.right(n))),
        Outcome::Center => match rule {
            CenterRule::Pot => Some(Target::Pool),
            CenterRule::Across if n % 2 == 0 => Some(Target::Seat(active.offset(n / 2, n))),
            CenterRule::Across => {
                let (left, right) = across_candidates(active, n);
                Some(Target::Seat(strategy.choose(left, right, state, die)))
            }
        },
    }
}
