//! Battle-variant sessions: damage, health clamping, and early termination.

use shiksha::bank::standard_bank;
use shiksha::constants::{
    BASE_DAMAGE, COUNTER_DAMAGE, DAMAGE_SCALING, FEEDBACK_DURATION_MS, MAX_HEALTH,
    TICK_INTERVAL_MS,
};
use shiksha::engine::{
    LevelSession, ProgressTracker, SessionMode, SessionOutcome, SessionPhase, SessionTick,
};

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
fn correct_answers_wear_the_opponent_down_to_early_victory() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Battle);

    // Streak-scaled damage: 20 + 25 + 30 + 35 = 110 >= 100, so the fourth
    // correct answer finishes the opponent before the questions run out.
    let mut expected_health = MAX_HEALTH;
    let mut end = None;
    for streak in 1..=4u32 {
        let correct = session.current_question().unwrap().correct_option;
        session.submit_answer(Some(correct)).unwrap();
        expected_health = expected_health.saturating_sub(BASE_DAMAGE + streak * DAMAGE_SCALING);
        assert_eq!(session.opponent_health(), expected_health);
        assert_eq!(session.player_health(), MAX_HEALTH);
        let tick = drive_feedback(&mut session, &mut tracker);
        if let Some(e) = tick.session_end {
            end = Some(e);
        }
    }

    let end = end.expect("battle should end when opponent health hits zero");
    assert_eq!(session.opponent_health(), 0);
    assert_eq!(end.outcome, SessionOutcome::Completed);
    assert_eq!(end.accuracy_percent, 100.0);
    assert!(tracker.record(1).completed);
}

#[test]
fn misses_drain_the_player_to_defeat() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Battle);

    // 100 / 20 counter damage = 5 misses to lose.
    let misses = MAX_HEALTH / COUNTER_DAMAGE;
    let mut end = None;
    for i in 1..=misses {
        let question = session.current_question().unwrap();
        let wrong = (question.correct_option + 1) % question.option_count();
        session.submit_answer(Some(wrong)).unwrap();
        assert_eq!(session.player_health(), MAX_HEALTH - i * COUNTER_DAMAGE);
        assert_eq!(session.opponent_health(), MAX_HEALTH);
        let tick = drive_feedback(&mut session, &mut tracker);
        if let Some(e) = tick.session_end {
            end = Some(e);
        }
    }

    let end = end.expect("battle should end when player health hits zero");
    assert_eq!(end.outcome, SessionOutcome::Failed);
    assert_eq!(end.final_score, 0);
    assert_eq!(end.accuracy_percent, 0.0);
    assert_eq!(session.phase(), SessionPhase::Failed);
}

#[test]
fn timeout_counts_as_a_counter_attack() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Battle);

    let limit_ms = u64::from(session.current_question().unwrap().time_limit_seconds) * 1000;
    session.tick(limit_ms, &mut tracker);
    assert_eq!(session.player_health(), MAX_HEALTH - COUNTER_DAMAGE);
    assert_eq!(session.opponent_health(), MAX_HEALTH);
    assert_eq!(session.answer_log(), &[false]);
}

#[test]
fn health_never_leaves_bounds() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Battle);

    // Run the whole level with alternating results; health must stay
    // in [0, MAX_HEALTH] throughout.
    let mut i = 0;
    loop {
        if session.is_over() {
            break;
        }
        let question = session.current_question().unwrap();
        let choice = if i % 2 == 0 {
            question.correct_option
        } else {
            (question.correct_option + 1) % question.option_count()
        };
        session.submit_answer(Some(choice)).unwrap();
        assert!(session.player_health() <= MAX_HEALTH);
        assert!(session.opponent_health() <= MAX_HEALTH);
        if drive_feedback(&mut session, &mut tracker).session_end.is_some() {
            break;
        }
        i += 1;
    }
}

#[test]
fn standard_mode_ignores_health_entirely() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut session = LevelSession::start(bank.level(1), &bank, SessionMode::Standard);

    for _ in 0..3 {
        let question = session.current_question().unwrap();
        let wrong = (question.correct_option + 1) % question.option_count();
        session.submit_answer(Some(wrong)).unwrap();
        drive_feedback(&mut session, &mut tracker);
    }
    assert_eq!(session.player_health(), MAX_HEALTH);
    assert_eq!(session.opponent_health(), MAX_HEALTH);
    assert_eq!(session.phase(), SessionPhase::InProgress);
}
