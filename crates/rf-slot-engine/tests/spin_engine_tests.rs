//! Spin Engine Test Suite
//!
//! End-to-end checks through the public API:
//! - Shipped config file matches the built-in game
//! - Aggregate totals agree with per-line detail
//! - Seeded and shared-engine behaviour
//! - Serialized output record

use std::path::PathBuf;
use std::sync::Arc;

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rf_slot_engine::{
    ALLOWED_BETS, BetSize, ConfigError, GameConfig, PaylineDetail, SimulationSummary, SlotError,
    SpinEngine, SpinResult,
};

// ═══════════════════════════════════════════════════════════════════════════════
// TEST FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════

fn gameplay_yaml() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/gameplay.yaml")
}

fn seeded_engine(seed: u64) -> SpinEngine {
    SpinEngine::seeded(GameConfig::standard(), seed)
}

fn assert_aggregates_match(result: &SpinResult) {
    let lines = result.all_paylines.as_ref().expect("full detail");
    let winners: Vec<_> = lines.iter().filter(|l| l.total > 0.0).collect();

    assert_relative_eq!(result.total, winners.iter().map(|l| l.total).sum::<f64>());
    assert_relative_eq!(result.multiplier, winners.iter().map(|l| l.multiplier).sum::<f64>());
    assert_relative_eq!(
        result.wild_multiplier,
        winners.iter().map(|l| l.wild_multiplier).sum::<f64>()
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_shipped_yaml_matches_built_in_game() {
    let loaded = GameConfig::load(gameplay_yaml()).unwrap();
    assert_eq!(loaded, GameConfig::standard());
}

#[test]
fn test_unknown_extension_rejected() {
    let path = std::env::temp_dir().join("rf_slot_engine_config.toml");
    std::fs::write(&path, "paylines = []").unwrap();

    let err = GameConfig::load(&path).unwrap_err();
    assert!(matches!(err, SlotError::UnsupportedFormat(ext) if ext == "toml"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_missing_file_is_io_error() {
    let err = GameConfig::load("/nonexistent/gameplay.yaml").unwrap_err();
    assert!(matches!(err, SlotError::Io(_)));
}

#[test]
fn test_broken_yaml_reports_config_defect() {
    let yaml = std::fs::read_to_string(gameplay_yaml())
        .unwrap()
        .replacen("[1, 1, 1, 1, 1]", "[1, 1, 1, 1]", 1);

    match GameConfig::from_yaml_str(&yaml) {
        Err(SlotError::Config(ConfigError::PaylineLength {
            payline: 0, found: 4, ..
        })) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SPIN OUTCOMES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_aggregates_match_line_detail() {
    let engine = seeded_engine(2024);

    for _ in 0..500 {
        let result = engine.spin(2.4);
        assert_aggregates_match(&result);
    }
}

#[test]
fn test_line_invariants_hold_over_many_spins() {
    let engine = seeded_engine(31337);

    for _ in 0..500 {
        let result = engine.spin(1.0);
        for line in result.all_paylines.as_ref().unwrap() {
            assert!((1..=5).contains(&line.count));
            if let Some(base) = &line.base_symbol {
                assert!(!base.starts_with('w'));
            }
            if line.total > 0.0 {
                assert!(line.count >= 3);
                assert!(line.wild_multiplier >= 1.0);
            } else {
                assert_eq!(line.multiplier, 0.0);
                assert_eq!(line.wild_multiplier, 0.0);
            }
        }
    }
}

#[test]
fn test_bet_per_line_for_every_denomination() {
    let engine = seeded_engine(5);

    for bet in BetSize::all() {
        let result = engine.spin_bet(bet);
        for line in result.all_paylines.as_ref().unwrap() {
            assert_eq!(line.bet_per_line, bet.value() / 20.0);
        }
    }
    assert_eq!(ALLOWED_BETS.len(), 30);
}

#[test]
fn test_win_scales_with_bet() {
    // Same seed, same grid: payout is linear in the stake
    let small = seeded_engine(88).spin(1.0);
    let large = seeded_engine(88).spin(10.0);

    assert_eq!(small.result, large.result);
    assert_relative_eq!(large.total, small.total * 10.0, epsilon = 1e-9);
    assert_eq!(small.multiplier, large.multiplier);
}

// ═══════════════════════════════════════════════════════════════════════════════
// RANDOMNESS AND SHARING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_chacha_streams_are_reproducible() {
    let engine = SpinEngine::default();
    let mut a = ChaCha8Rng::seed_from_u64(1);
    let mut b = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..100 {
        assert_eq!(engine.spin_with(&mut a, 2.0), engine.spin_with(&mut b, 2.0));
    }
}

#[test]
fn test_engine_with_chacha_rng() {
    let config = Arc::new(GameConfig::standard());
    let a = SpinEngine::with_rng(Arc::clone(&config), ChaCha8Rng::seed_from_u64(3));
    let b = SpinEngine::with_rng(config, ChaCha8Rng::seed_from_u64(3));

    assert_eq!(a.spin(0.2), b.spin(0.2));
}

#[test]
fn test_shared_engine_across_threads() {
    let engine = seeded_engine(11);
    let per_thread = 250;

    let summaries: Vec<SimulationSummary> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let mut summary = SimulationSummary::new();
                    for _ in 0..per_thread {
                        let result = engine.spin(1.0);
                        assert_aggregates_match(&result);
                        summary.record(1.0, &result);
                    }
                    summary
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let total = summaries
        .into_iter()
        .fold(SimulationSummary::new(), SimulationSummary::merge);
    assert_eq!(total.spins, 4 * per_thread);
    assert_relative_eq!(total.total_bet, 1000.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// OUTPUT RECORD
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_full_output_record() {
    let result = seeded_engine(4).spin(2.0);
    let json = serde_json::to_value(&result).unwrap();

    let grid = json["result"].as_array().unwrap();
    assert_eq!(grid.len(), 5);
    assert!(grid.iter().all(|reel| reel.as_array().unwrap().len() == 3));

    let lines = json["allPaylines"].as_array().unwrap();
    assert_eq!(lines.len(), 20);
    for key in ["paylineCheck", "count", "baseSymbol", "betPerLine", "mult", "wildMult", "total"] {
        assert!(lines[0].get(key).is_some(), "missing {key}");
    }

    for key in ["mult", "wildMult", "total"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn test_omitted_detail_keeps_totals() {
    let full = seeded_engine(6).spin(4.0);
    let slim = seeded_engine(6)
        .with_payline_detail(PaylineDetail::Omit)
        .spin(4.0);

    assert_eq!(full.result, slim.result);
    assert_eq!(full.total, slim.total);
    assert_eq!(full.multiplier, slim.multiplier);

    let json = serde_json::to_value(&slim).unwrap();
    assert!(json.get("allPaylines").is_none());
}
