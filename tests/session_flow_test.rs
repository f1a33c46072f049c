//! End-to-end level session flow: scoring, timeouts, pause, and the
//! progress-tracker handoff at session end.

use shiksha::bank::standard_bank;
use shiksha::constants::{BASE_POINTS, FEEDBACK_DURATION_MS, STREAK_MULTIPLIER, TICK_INTERVAL_MS};
use shiksha::engine::{
    Badge, LevelSession, ProgressTracker, SessionMode, SessionOutcome, SessionPhase, SessionTick,
};

/// Tick through the feedback window until the session advances or ends.
fn drive_feedback(session: &mut LevelSession, tracker: &mut ProgressTracker) -> SessionTick {
    let max_ticks = FEEDBACK_DURATION_MS / TICK_INTERVAL_MS + 2;
    for _ in 0..max_ticks {
        let tick = session.tick(TICK_INTERVAL_MS, tracker);
        if tick.advanced || tick.session_end.is_some() {
            return tick;
        }
    }
    panic!("feedback window never elapsed");
}

#[test]
fn perfect_run_scores_165_with_full_accuracy_and_gold() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Standard);

    let mut end = None;
    for expected_streak in 1..=6u32 {
        let correct = session.current_question().unwrap().correct_option;
        let outcome = session.submit_answer(Some(correct)).unwrap();
        assert_eq!(outcome.new_streak, expected_streak);
        assert_eq!(
            outcome.points_awarded,
            BASE_POINTS + expected_streak * STREAK_MULTIPLIER
        );
        let tick = drive_feedback(&mut session, &mut tracker);
        if let Some(e) = tick.session_end {
            end = Some(e);
        }
    }

    // 6 questions at 10 + 5k points: 60 + 5*(1+..+6) = 165.
    let end = end.expect("session ended after the last question");
    assert_eq!(end.final_score, 165);
    assert_eq!(end.accuracy_percent, 100.0);
    assert_eq!(end.outcome, SessionOutcome::Completed);
    assert_eq!(session.phase(), SessionPhase::Completed);

    // Recorded into progress: completion, best score, gold badge, next unlock.
    let record = tracker.record(1);
    assert!(record.completed);
    assert_eq!(record.best_score, 165);
    assert_eq!(record.badge, Badge::Gold);
    assert!(tracker.is_level_unlocked(2));
    assert!(!tracker.is_level_unlocked(3));
}

#[test]
fn timeout_matches_wrong_submission_and_advances_once() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Standard);

    // Build a streak first so the reset is observable.
    let correct = session.current_question().unwrap().correct_option;
    session.submit_answer(Some(correct)).unwrap();
    drive_feedback(&mut session, &mut tracker);
    assert_eq!(session.streak(), 1);

    // Let the second question expire.
    let limit_ms = u64::from(session.current_question().unwrap().time_limit_seconds) * 1000;
    let mut timed_out_ticks = 0;
    let mut elapsed = 0;
    while elapsed <= limit_ms {
        let tick = session.tick(TICK_INTERVAL_MS, &mut tracker);
        if tick.timed_out {
            timed_out_ticks += 1;
            let outcome = tick.answered.unwrap();
            assert!(!outcome.is_correct);
            assert_eq!(outcome.points_awarded, 0);
            assert_eq!(outcome.new_streak, 0);
        }
        elapsed += TICK_INTERVAL_MS;
    }
    assert_eq!(timed_out_ticks, 1);
    assert_eq!(session.streak(), 0);
    assert_eq!(session.answer_log(), &[true, false]);

    // A late submission while feedback is showing is swallowed.
    assert!(session.submit_answer(Some(0)).is_none());
    let tick = drive_feedback(&mut session, &mut tracker);
    assert!(tick.advanced);
    assert_eq!(session.current_question_index(), 2);
    assert_eq!(session.answer_log().len(), 2);
}

#[test]
fn mixed_run_earns_the_matching_badge() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Standard);

    // 5 of 6 correct: 83.3% accuracy lands on silver.
    let mut end = None;
    for i in 0..6 {
        let question = session.current_question().unwrap();
        let choice = if i == 0 {
            (question.correct_option + 1) % question.option_count()
        } else {
            question.correct_option
        };
        session.submit_answer(Some(choice)).unwrap();
        let tick = drive_feedback(&mut session, &mut tracker);
        if let Some(e) = tick.session_end {
            end = Some(e);
        }
    }

    let end = end.unwrap();
    assert!(end.accuracy_percent > 75.0 && end.accuracy_percent < 90.0);
    assert_eq!(tracker.record(1).badge, Badge::Silver);
}

#[test]
fn replaying_never_lowers_best_score_or_badge() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());

    // First run: all correct.
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Standard);
    loop {
        let correct = session.current_question().unwrap().correct_option;
        session.submit_answer(Some(correct)).unwrap();
        if drive_feedback(&mut session, &mut tracker).session_end.is_some() {
            break;
        }
    }
    assert_eq!(tracker.record(1).best_score, 165);
    assert_eq!(tracker.record(1).badge, Badge::Gold);

    // Second run: all wrong.
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Standard);
    loop {
        let question = session.current_question().unwrap();
        let wrong = (question.correct_option + 1) % question.option_count();
        session.submit_answer(Some(wrong)).unwrap();
        if drive_feedback(&mut session, &mut tracker).session_end.is_some() {
            break;
        }
    }
    assert_eq!(tracker.record(1).best_score, 165);
    assert_eq!(tracker.record(1).badge, Badge::Gold);
    assert!(tracker.record(1).completed);
}

#[test]
fn pause_holds_the_countdown_through_arbitrary_ticks() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Standard);

    session.tick(3_000, &mut tracker);
    let remaining = session.time_remaining();
    session.pause();
    for _ in 0..100 {
        session.tick(10_000, &mut tracker);
    }
    assert_eq!(session.time_remaining(), remaining);
    assert_eq!(session.answer_log().len(), 0);

    session.resume();
    session.tick(1_000, &mut tracker);
    assert!(session.time_remaining() < remaining);
}

#[test]
fn reset_mid_level_starts_over_without_recording() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Standard);

    let correct = session.current_question().unwrap().correct_option;
    session.submit_answer(Some(correct)).unwrap();
    drive_feedback(&mut session, &mut tracker);
    assert!(session.score() > 0);

    session.reset();
    assert_eq!(session.score(), 0);
    assert_eq!(session.current_question_index(), 0);
    assert!(!tracker.record(1).completed);
}
