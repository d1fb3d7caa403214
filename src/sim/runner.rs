//! Batch runner: many independent games, one report.
//!
//! The batch is split into `chunks` slices. Each slice gets its own engine
//! and a `GameRng` forked from the batch seed in slice order, runs on the
//! rayon pool, and the per-slice statistics are merged back in slice order.
//! The report depends only on `(table, games, seed, chunks)`.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::stats::SimulationStats;
use crate::core::{GameRng, RandomSource, Result, TableConfig};
use crate::rules::GameEngine;

/// Batch parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Games to play.
    pub games: u64,

    /// Seed for the batch; every slice forks from it.
    pub seed: u64,

    /// Independent slices run in parallel. Zero is treated as one.
    pub chunks: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100_000,
            seed: 42,
            chunks: 1,
        }
    }
}

impl SimulationConfig {
    /// Create a batch config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    /// Set the batch seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of parallel slices.
    #[must_use]
    pub fn with_chunks(mut self, chunks: usize) -> Self {
        self.chunks = chunks;
        self
    }

    /// Games in each slice, in slice order. Earlier slices take the remainder.
    #[must_use]
    pub fn chunk_sizes(&self) -> Vec<u64> {
        let chunks = self.chunks.max(1) as u64;
        let base = self.games / chunks;
        let extra = self.games % chunks;
        (0..chunks).map(|i| base + u64::from(i < extra)).collect()
    }

    /// `lrc` flags that replay this batch. The chunk count is part of the
    /// stream layout, so it is always included.
    #[must_use]
    pub fn reproduce_flags(&self) -> String {
        format!("--games {} --seed {} --chunks {}", self.games, self.seed, self.chunks.max(1))
    }
}

/// Everything a batch produced, with the inputs needed to reproduce it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub table: TableConfig,
    pub seed: u64,
    pub chunks: usize,
    pub stats: SimulationStats,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.stats;
        writeln!(f, "Average #turns: {:?}", stats.mean_turns)?;
        writeln!(f, "Max Turns: {}", stats.max_turns.unwrap_or(0))?;
        writeln!(f, "Min Turns: {}", stats.min_turns.unwrap_or(0))?;
        writeln!(f, "Winners")?;
        for (seat, wins) in stats.wins.iter() {
            writeln!(f, "{} won {} times", seat, wins)?;
        }
        Ok(())
    }
}

/// Play `games` games on an existing engine, folding each into fresh stats.
pub fn play_games<R: RandomSource>(engine: &mut GameEngine<R>, games: u64) -> SimulationStats {
    let mut stats = SimulationStats::new(engine.config().num_players);
    for _ in 0..games {
        stats.record(&engine.play_game());
    }
    stats
}

/// Run a whole batch.
///
/// Fails with `Error::InvalidConfiguration` before any game is played if the
/// table is unplayable. Individual games cannot fail.
pub fn run(table: &TableConfig, sim: &SimulationConfig) -> Result<SimulationReport> {
    table.validate()?;

    let sizes = sim.chunk_sizes();
    let mut root = GameRng::new(sim.seed);
    let slices: Vec<(GameRng, u64)> = sizes.iter().map(|&games| (root.fork(), games)).collect();

    info!(
        games = sim.games,
        players = table.num_players,
        chips = table.starting_chips,
        center = %table.center_rule,
        chunks = slices.len(),
        seed = sim.seed,
        "starting batch"
    );

    let parts = slices
        .into_par_iter()
        .map(|(rng, games)| -> Result<SimulationStats> {
            debug!(chunk_seed = rng.seed(), games, "chunk started");
            let mut engine = GameEngine::with_source(table.clone(), rng)?;
            Ok(play_games(&mut engine, games))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stats = SimulationStats::new(table.num_players);
    for part in &parts {
        stats.merge(part);
    }

    info!(
        games = stats.games,
        mean_turns = stats.mean_turns,
        min_turns = ?stats.min_turns,
        max_turns = ?stats.max_turns,
        "batch finished"
    );

    Ok(SimulationReport {
        table: table.clone(),
        seed: sim.seed,
        chunks: parts.len(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CenterRule, ConfigError, Error, ScriptedSource, SeatId};
    use crate::rules::GameOutcome;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.games, 100_000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.chunks, 1);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SimulationConfig::new().with_games(10).with_seed(7).with_chunks(3);
        assert_eq!(config.games, 10);
        assert_eq!(config.seed, 7);
        assert_eq!(config.chunks, 3);
    }

    #[test]
    fn test_chunk_sizes() {
        let sizes = |games, chunks| {
            SimulationConfig::new().with_games(games).with_chunks(chunks).chunk_sizes()
        };
        assert_eq!(sizes(10, 3), vec![4, 3, 3]);
        assert_eq!(sizes(2, 4), vec![1, 1, 0, 0]);
        assert_eq!(sizes(5, 0), vec![5]);
    }

    #[test]
    fn test_reproduce_flags_name_the_chunks() {
        let sim = SimulationConfig::new().with_games(500).with_seed(17).with_chunks(12);
        assert_eq!(sim.reproduce_flags(), "--games 500 --seed 17 --chunks 12");

        let flags = SimulationConfig::new().with_chunks(0).reproduce_flags();
        assert!(flags.ends_with("--chunks 1"));
    }

    #[test]
    fn test_play_games_scripted() {
        // Two seats, one chip each, seat 0 always passes right: every game
        // ends after one turn with seat 1 holding both chips.
        let source = ScriptedSource::new(vec![1]);
        let mut engine = GameEngine::with_source(TableConfig::new(2, 1), source).unwrap();
        let stats = play_games(&mut engine, 5);

        assert_eq!(stats.games, 5);
        assert_eq!(stats.min_turns, Some(1));
        assert_eq!(stats.max_turns, Some(1));
        assert_eq!(stats.wins[SeatId::new(1)], 5);
    }

    #[test]
    fn test_run_counts_every_game() {
        let table = TableConfig::new(4, 3).with_center_rule(CenterRule::Pot);
        let report = run(&table, &SimulationConfig::new().with_games(250).with_chunks(4)).unwrap();

        assert_eq!(report.stats.games, 250);
        assert_eq!(report.stats.wins.values().sum::<u64>(), 250);
        assert_eq!(report.chunks, 4);
    }

    #[test]
    fn test_run_rejects_invalid_table() {
        let err = run(&TableConfig::new(1, 3), &SimulationConfig::new().with_games(1)).unwrap_err();
        assert_eq!(err, Error::InvalidConfiguration(ConfigError::TooFewPlayers(1)));
    }

    #[test]
    fn test_report_display() {
        let source = ScriptedSource::new(vec![1]);
        let mut engine = GameEngine::with_source(TableConfig::new(2, 1), source).unwrap();
        let report = SimulationReport {
            table: TableConfig::new(2, 1),
            seed: 0,
            chunks: 1,
            stats: play_games(&mut engine, 3),
        };

        let text = report.to_string();
        assert!(text.starts_with("Average #turns: 1.0\n"));
        assert!(text.contains("Max Turns: 1\n"));
        assert!(text.contains("Min Turns: 1\n"));
        assert!(text.contains("Player 0 won 0 times\n"));
        assert!(text.contains("Player 1 won 3 times\n"));
    }

    #[test]
    fn test_report_display_keeps_fraction() {
        let mut stats = SimulationStats::new(2);
        for (winner, turns) in [(1, 3), (0, 4)] {
            stats.record(&GameOutcome {
                winner: SeatId::new(winner),
                turns,
            });
        }
        let report = SimulationReport {
            table: TableConfig::new(2, 1),
            seed: 0,
            chunks: 1,
            stats,
        };

        let text = report.to_string();
        assert!(text.starts_with("Average #turns: 3.5\n"));
        assert!(text.contains("Max Turns: 4\n"));
        assert!(text.contains("Min Turns: 3\n"));
    }
}
