//! Simulator integration: reproducibility and sane aggregate behavior.

use shiksha::bank::standard_bank;
use shiksha::engine::SessionMode;
use shiksha::simulator::{run_simulation, SimConfig};

#[test]
fn identical_seeds_give_identical_reports() {
    let bank = standard_bank();
    let config = SimConfig {
        num_runs: 25,
        seed: Some(99),
        accuracy: 0.7,
        verbosity: 0,
        ..Default::default()
    };

    let a = run_simulation(&config, &bank);
    let b = run_simulation(&config, &bank);
    assert_eq!(a.avg_total_score, b.avg_total_score);
    assert_eq!(a.max_total_score, b.max_total_score);
    assert_eq!(a.total_timeouts, b.total_timeouts);
    assert_eq!(a.battle_failures, b.battle_failures);
}

#[test]
fn sharper_learners_score_higher_on_average() {
    let bank = standard_bank();
    let base = SimConfig {
        num_runs: 40,
        seed: Some(11),
        verbosity: 0,
        ..Default::default()
    };

    let weak = run_simulation(
        &SimConfig {
            accuracy: 0.3,
            ..base.clone()
        },
        &bank,
    );
    let strong = run_simulation(
        &SimConfig {
            accuracy: 0.95,
            ..base
        },
        &bank,
    );
    assert!(strong.avg_total_score > weak.avg_total_score);
    assert!(strong.badge_counts.gold > weak.badge_counts.gold);
}

#[test]
fn battle_mode_defeats_low_accuracy_learners_sometimes() {
    let bank = standard_bank();
    let config = SimConfig {
        num_runs: 60,
        seed: Some(5),
        accuracy: 0.1,
        mode: SessionMode::Battle,
        verbosity: 0,
        ..Default::default()
    };

    let report = run_simulation(&config, &bank);
    // At 10% accuracy, losing a battle (5 misses before 6 questions run
    // out) is the overwhelmingly common outcome.
    assert!(report.battle_failures > 0);
}

#[test]
fn report_json_is_well_formed() {
    let bank = standard_bank();
    let config = SimConfig {
        num_runs: 3,
        seed: Some(1),
        verbosity: 0,
        ..Default::default()
    };
    let report = run_simulation(&config, &bank);
    let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(value["num_runs"], 3);
    assert!(value["run_stats"].as_array().unwrap().len() == 3);
}
