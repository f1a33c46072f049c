//! Learning-curve simulator for Monte Carlo balance analysis.
//!
//! Plays thousands of simulated learners through the real engine to check:
//! - how score and badges respond to learner accuracy,
//! - how often battle mode defeats a struggling learner,
//! - how answer speed (and timeouts) shape the score curve.
//!
//! The simulator drives `LevelSession` directly, so its numbers always match
//! real gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{BadgeCounts, SimReport};
pub use runner::{run_simulation, RunStats};
