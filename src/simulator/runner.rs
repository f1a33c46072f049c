//! Simulation runner driving the real engine.
//!
//! Each simulated learner plays the full level chain through the same
//! `LevelSession`/`ProgressTracker` code the interactive game uses, so
//! results match real gameplay. Statistics are accumulated externally from
//! `SessionTick` events.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::config::SimConfig;
use super::report::SimReport;
use crate::bank::QuestionBank;
use crate::constants::TICK_INTERVAL_MS;
use crate::engine::{
    Badge, LevelSession, ProgressTracker, SessionOutcome, SessionPhase,
};

/// What one simulated learner achieved.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub levels_completed: usize,
    pub total_score: u32,
    pub per_level_score: Vec<u32>,
    pub badges: Vec<Badge>,
    pub failed_battles: u32,
    pub timeouts: u32,
    pub completion_percent: f64,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig, bank: &QuestionBank) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + u64::from(run_idx)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, bank, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - levels {}, score {}, timeouts {}, failed battles {}",
                run_idx + 1,
                config.num_runs,
                run.levels_completed,
                run.total_score,
                run.timeouts,
                run.failed_battles
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs, bank.level_count())
}

fn simulate_single_run(config: &SimConfig, bank: &QuestionBank, rng: &mut ChaCha8Rng) -> RunStats {
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut per_level_score = Vec::with_capacity(bank.level_count());
    let mut failed_battles = 0;
    let mut timeouts = 0;

    for level_number in 1..=bank.level_count() as u32 {
        if !tracker.is_level_unlocked(level_number) {
            break;
        }
        let mut session = LevelSession::start(bank.level(level_number), bank, config.mode);
        let outcome = play_session(config, &mut session, &mut tracker, rng, &mut timeouts);
        if outcome == Some(SessionOutcome::Failed) {
            failed_battles += 1;
        }
        per_level_score.push(session.score());
    }

    let badges = (1..=bank.level_count() as u32)
        .map(|n| tracker.record(n).badge)
        .collect();

    RunStats {
        levels_completed: tracker.levels_completed(),
        total_score: per_level_score.iter().sum(),
        per_level_score,
        badges,
        failed_battles,
        timeouts,
        completion_percent: tracker.completion_percent(),
    }
}

/// Tick one session to its end under the answer policy. Returns the terminal
/// outcome (None only if the tick budget safety valve trips).
fn play_session(
    config: &SimConfig,
    session: &mut LevelSession,
    tracker: &mut ProgressTracker,
    rng: &mut ChaCha8Rng,
    timeouts: &mut u32,
) -> Option<SessionOutcome> {
    let mut answer_at_ms = decide_answer_time(config, rng);
    let mut elapsed_in_question: u64 = 0;

    // Generous ceiling; a session can never legitimately run this long.
    for _ in 0..1_000_000 {
        if session.phase() != SessionPhase::InProgress {
            break;
        }

        if session.feedback_outcome().is_none() && elapsed_in_question >= answer_at_ms {
            let question = session.current_question().expect("in-progress session has a question");
            let choice = pick_option(config, question.correct_option, question.option_count(), rng);
            session.submit_answer(Some(choice));
        }

        let tick = session.tick(TICK_INTERVAL_MS, tracker);
        elapsed_in_question += TICK_INTERVAL_MS;
        if tick.timed_out {
            *timeouts += 1;
        }
        if tick.advanced {
            elapsed_in_question = 0;
            answer_at_ms = decide_answer_time(config, rng);
        }
        if let Some(end) = tick.session_end {
            return Some(end.outcome);
        }
    }
    None
}

/// How long this learner takes on the current question, with ±50% jitter.
/// May exceed the question's limit, which plays out as a timeout.
fn decide_answer_time(config: &SimConfig, rng: &mut ChaCha8Rng) -> u64 {
    let jitter = rng.gen_range(0.5..1.5);
    (config.answer_delay_seconds * jitter * 1000.0) as u64
}

/// Correct with probability `accuracy`, otherwise a uniformly chosen wrong
/// option.
fn pick_option(
    config: &SimConfig,
    correct_option: usize,
    option_count: usize,
    rng: &mut ChaCha8Rng,
) -> usize {
    if rng.gen_bool(config.accuracy.clamp(0.0, 1.0)) {
        correct_option
    } else {
        let wrong = rng.gen_range(0..option_count - 1);
        if wrong >= correct_option {
            wrong + 1
        } else {
            wrong
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::standard_bank;

    #[test]
    fn perfect_learner_completes_everything_with_gold() {
        let bank = standard_bank();
        let config = SimConfig {
            seed: Some(7),
            verbosity: 0,
            ..SimConfig::perfect()
        };
        let report = run_simulation(&config, &bank);
        assert_eq!(report.avg_completion_percent, 100.0);
        assert_eq!(report.badge_counts.gold as usize, bank.level_count());
        assert_eq!(report.badge_counts.none, 0);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let bank = standard_bank();
        let config = SimConfig {
            num_runs: 20,
            seed: Some(42),
            accuracy: 0.6,
            verbosity: 0,
            ..Default::default()
        };
        let a = run_simulation(&config, &bank);
        let b = run_simulation(&config, &bank);
        assert_eq!(a.avg_total_score, b.avg_total_score);
        assert_eq!(a.total_timeouts, b.total_timeouts);
    }

    #[test]
    fn slow_learner_times_out() {
        let bank = standard_bank();
        let config = SimConfig {
            num_runs: 5,
            seed: Some(3),
            accuracy: 1.0,
            answer_delay_seconds: 120.0,
            verbosity: 0,
            ..Default::default()
        };
        let report = run_simulation(&config, &bank);
        assert!(report.total_timeouts > 0);
        // Timing out everything means zero accuracy, so no badges.
        assert_eq!(report.badge_counts.gold, 0);
    }

    #[test]
    fn pick_option_never_returns_wrong_when_accuracy_is_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = SimConfig {
            accuracy: 1.0,
            ..Default::default()
        };
        for _ in 0..100 {
            assert_eq!(pick_option(&config, 2, 4, &mut rng), 2);
        }
    }

    #[test]
    fn pick_option_never_returns_correct_when_accuracy_is_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = SimConfig {
            accuracy: 0.0,
            ..Default::default()
        };
        for _ in 0..100 {
            assert_ne!(pick_option(&config, 2, 4, &mut rng), 2);
        }
    }
}
