//! Simulation configuration.

use crate::engine::SessionMode;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated learners.
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random).
    pub seed: Option<u64>,

    /// Probability that the simulated learner answers correctly.
    pub accuracy: f64,

    /// Mean seconds the learner takes per question. Values beyond a
    /// question's time limit produce timeouts.
    pub answer_delay_seconds: f64,

    /// Which game mode to play.
    pub mode: SessionMode,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run detail).
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            accuracy: 0.75,
            answer_delay_seconds: 6.0,
            mode: SessionMode::Standard,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for battle-mode balance checks.
    pub fn battle_balance_test(accuracy: f64) -> Self {
        Self {
            num_runs: 200,
            accuracy,
            mode: SessionMode::Battle,
            ..Default::default()
        }
    }

    /// A learner who answers everything correctly and immediately.
    pub fn perfect() -> Self {
        Self {
            num_runs: 1,
            accuracy: 1.0,
            answer_delay_seconds: 1.0,
            ..Default::default()
        }
    }
}
