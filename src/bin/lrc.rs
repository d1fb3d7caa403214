//! LRC CLI: run Left-Right-Center batches from the command line.
//!
//! Usage:
//!   cargo run --release --bin lrc -- --games 1000000 --players 5
//!   cargo run --release --bin lrc -- --players 5 --center across --strategy richer
//!   cargo run --release --bin lrc -- --players 5 --center across --sweep 0 --json

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lrc_sim::{run, sweep_strategies, CenterRule, SeatId, SimulationConfig, Strategy, TableConfig};

#[derive(Parser)]
#[command(name = "lrc", about = "Monte-Carlo simulation of the dice game Left-Right-Center")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value = "100000")]
    games: u64,

    /// Players at the table
    #[arg(short, long, default_value = "5")]
    players: usize,

    /// Chips each player starts with
    #[arg(long, default_value = "3")]
    chips: u32,

    /// Across strategy: one per seat, or a single value for every seat
    /// (random, left, right, richer, poorer)
    #[arg(long, value_delimiter = ',')]
    strategy: Vec<Strategy>,

    /// Where Center chips go: "pot" or "across"
    #[arg(long, default_value = "pot")]
    center: CenterRule,

    /// Random seed (default: drawn from the OS)
    #[arg(long)]
    seed: Option<u64>,

    /// Parallel slices (default: one per rayon thread)
    #[arg(long)]
    chunks: Option<usize>,

    /// Run every strategy for this seat and compare win rates
    #[arg(long)]
    sweep: Option<u8>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn table(&self) -> TableConfig {
        let table = TableConfig::new(self.players, self.chips).with_center_rule(self.center);
        match self.strategy.as_slice() {
            [] => table,
            [single] => table.with_uniform_strategy(*single),
            many => table.with_strategies(many.to_vec()),
        }
    }

    fn simulation(&self) -> SimulationConfig {
        SimulationConfig::new()
            .with_games(self.games)
            .with_seed(self.seed.unwrap_or_else(rand::random))
            .with_chunks(self.chunks.unwrap_or_else(rayon::current_num_threads))
    }
}

fn execute(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let table = cli.table();
    let sim = cli.simulation();
    info!(seed = sim.seed, chunks = sim.chunks, "reproduce with {}", sim.reproduce_flags());

    match cli.sweep {
        Some(seat) => {
            let entries = sweep_strategies(&table, SeatId::new(seat), &sim)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("Strategy sweep for {} ({} games each)", SeatId::new(seat), sim.games);
                for entry in &entries {
                    println!(
                        "  {:>8}: won {:6.2}%  avg turns {:.2}",
                        entry.strategy,
                        entry.win_rate() * 100.0,
                        entry.report.stats.mean_turns,
                    );
                }
            }
        }
        None => {
            let report = run(&table, &sim)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "simulation aborted");
            ExitCode::from(2)
        }
    }
}
