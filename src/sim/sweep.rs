//! Strategy sweep: how much does one seat's across preference matter?
//!
//! The batch is rerun once per `Strategy` with only the focal seat's
//! strategy changed. Every run uses the same seed so the comparison differs
//! only where the strategy was actually consulted.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::runner::{run, SimulationConfig, SimulationReport};
use crate::core::{ConfigError, Result, SeatId, Strategy, TableConfig};

/// One strategy's batch in a sweep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepEntry {
    pub strategy: Strategy,
    pub seat: SeatId,
    pub report: SimulationReport,
}

impl SweepEntry {
    /// Fraction of games the focal seat won with this strategy.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        self.report.stats.win_rate(self.seat)
    }
}

/// Run the batch once per strategy for `seat`.
pub fn sweep_strategies(
    table: &TableConfig,
    seat: SeatId,
    sim: &SimulationConfig,
) -> Result<Vec<SweepEntry>> {
    table.validate()?;
    if seat.index() >= table.num_players {
        return Err(ConfigError::SeatOutOfRange {
            seat: seat.index(),
            num_players: table.num_players,
        }
        .into());
    }
    if !table.strategies_matter() {
        warn!(
            players = table.num_players,
            center = %table.center_rule,
            "strategies are never consulted on this table"
        );
    }

    Strategy::ALL
        .into_iter()
        .map(|strategy| -> Result<SweepEntry> {
            let variant = table.clone().with_seat_strategy(seat, strategy);
            let report = run(&variant, sim)?;
            info!(%seat, %strategy, win_rate = report.stats.win_rate(seat), "sweep step finished");
            Ok(SweepEntry { strategy, seat, report })
        })
        .collect()
}
