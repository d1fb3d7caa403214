//! Batch runner, sweep and report tests.

use lrc_sim::core::{CenterRule, GameRng, SeatId, Strategy, TableConfig};
use lrc_sim::rules::GameEngine;
use lrc_sim::sim::{
    play_games, run, sweep_strategies, SimulationConfig, SimulationReport, SimulationStats,
};

fn pot_table() -> TableConfig {
    TableConfig::new(5, 3)
}

#[test]
fn test_single_chunk_matches_sequential_engine() {
    let table = pot_table();
    let sim = SimulationConfig::new().with_games(500).with_seed(2024).with_chunks(1);
    let report = run(&table, &sim).unwrap();

    // The only chunk plays on the first fork of the batch seed
    let mut root = GameRng::new(2024);
    let mut engine = GameEngine::with_source(table, root.fork()).unwrap();
    let expected = play_games(&mut engine, 500);

    assert_eq!(report.stats, expected);
    assert_eq!(report.seed, 2024);
    assert_eq!(report.chunks, 1);
}

#[test]
fn test_parallel_runs_are_reproducible() {
    let table = pot_table();
    let sim = SimulationConfig::new().with_games(2_000).with_seed(7).with_chunks(8);

    let first = run(&table, &sim).unwrap();
    let second = run(&table, &sim).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.stats.games, 2_000);
    assert_eq!(first.stats.wins.values().sum::<u64>(), 2_000);
}

#[test]
fn test_chunks_split_games_exactly() {
    let table = pot_table();
    for chunks in [1, 3, 7, 16] {
        let sim = SimulationConfig::new().with_games(101).with_seed(5).with_chunks(chunks);
        let report = run(&table, &sim).unwrap();
        assert_eq!(report.stats.games, 101, "chunks={chunks}");
        assert_eq!(report.chunks, chunks);
    }
}

#[test]
fn test_merged_chunks_match_manual_merge() {
    let table = pot_table();
    let sim = SimulationConfig::new().with_games(300).with_seed(9).with_chunks(3);
    let report = run(&table, &sim).unwrap();

    let mut root = GameRng::new(9);
    let mut merged = SimulationStats::new(5);
    for _ in 0..3 {
        let mut engine = GameEngine::with_source(table.clone(), root.fork()).unwrap();
        merged.merge(&play_games(&mut engine, 100));
    }

    assert_eq!(report.stats, merged);
    assert!((report.stats.mean_turns - merged.exact_mean_turns()).abs() < 1e-9);
}

#[test]
fn test_zero_games_report() {
    let report = run(&pot_table(), &SimulationConfig::new().with_games(0)).unwrap();
    assert_eq!(report.stats.games, 0);
    assert_eq!(report.stats.min_turns, None);
    assert!(report.to_string().contains("Max Turns: 0\n"));
}

#[test]
fn test_sweep_changes_only_focal_seat() {
    let table = TableConfig::new(3, 3)
        .with_uniform_strategy(Strategy::PreferLeft)
        .with_center_rule(CenterRule::Across);
    let sim = SimulationConfig::new().with_games(200).with_seed(31);
    let entries = sweep_strategies(&table, SeatId::new(2), &sim).unwrap();

    assert_eq!(entries.len(), Strategy::ALL.len());
    for entry in &entries {
        assert_eq!(entry.seat, SeatId::new(2));
        assert_eq!(entry.report.table.strategy_for(SeatId::new(0)), Strategy::PreferLeft);
        assert_eq!(entry.report.table.strategy_for(SeatId::new(1)), Strategy::PreferLeft);
        assert_eq!(entry.report.table.strategy_for(SeatId::new(2)), entry.strategy);
        assert_eq!(entry.report.stats.games, 200);
    }

    // The PreferLeft entry reruns the unmodified table
    let baseline = run(&table, &sim).unwrap();
    let left = entries.iter().find(|e| e.strategy == Strategy::PreferLeft).unwrap();
    assert_eq!(left.report.stats, baseline.stats);
}

#[test]
fn test_report_json_round_trip() {
    let table = TableConfig::new(3, 2)
        .with_strategies(vec![
            Strategy::PreferRicher,
            Strategy::RandomPick,
            Strategy::PreferPoorer,
        ])
        .with_center_rule(CenterRule::Across);
    let report = run(&table, &SimulationConfig::new().with_games(50).with_seed(1)).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"prefer_richer\""));
    assert!(json.contains("\"center_rule\":\"across\""));

    let decoded: SimulationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.table, report.table);
    assert_eq!(decoded.stats.wins, report.stats.wins);
    assert_eq!(decoded.stats.games, 50);
}

#[test]
fn test_report_text_lists_every_seat() {
    let report = run(&pot_table(), &SimulationConfig::new().with_games(100).with_seed(3)).unwrap();
    let text = report.to_string();

    assert!(text.starts_with("Average #turns: "));
    assert!(text.contains("Winners\n"));
    for i in 0..5 {
        let line = format!("Player {i} won {} times", report.stats.wins[SeatId::new(i)]);
        assert!(text.contains(&line), "missing {line:?} in {text}");
    }
}
