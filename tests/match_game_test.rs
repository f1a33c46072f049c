//! Tile-match game over the shared engine: snapping drops to option slots.

use shiksha::bank::standard_bank;
use shiksha::constants::{FEEDBACK_DURATION_MS, TICK_INTERVAL_MS};
use shiksha::engine::{ProgressTracker, SessionPhase};
use shiksha::matching::{MatchGame, MatchInput};

fn drive_feedback(game: &mut MatchGame, tracker: &mut ProgressTracker) -> bool {
    let max_ticks = FEEDBACK_DURATION_MS / TICK_INTERVAL_MS + 2;
    for _ in 0..max_ticks {
        let tick = game.tick(TICK_INTERVAL_MS, tracker);
        if tick.session_end.is_some() {
            return true;
        }
        if tick.advanced {
            return false;
        }
    }
    panic!("feedback window never elapsed");
}

/// Walk the token onto a slot one step at a time.
fn move_token_to(game: &mut MatchGame, x: f64, y: f64) {
    for _ in 0..1_000 {
        let token = game.token();
        let input = if token.x < x - 0.5 {
            MatchInput::Right
        } else if token.x > x + 0.5 {
            MatchInput::Left
        } else if token.y < y - 0.5 {
            MatchInput::Down
        } else if token.y > y + 0.5 {
            MatchInput::Up
        } else {
            return;
        };
        game.process_input(input);
    }
    panic!("token never reached target");
}

#[test]
fn dropping_on_the_correct_slot_scores_through_the_engine() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut game = MatchGame::start(bank.level(1), &bank);

    let correct = game.session().current_question().unwrap().correct_option;
    let slot = game.targets()[correct].position;
    move_token_to(&mut game, slot.x, slot.y);
    game.process_input(MatchInput::Drop);

    let outcome = game.session().feedback_outcome().expect("drop submitted an answer");
    assert!(outcome.is_correct);
    assert!(game.session().score() > 0);
    assert_eq!(game.session().streak(), 1);
    drive_feedback(&mut game, &mut tracker);
    assert_eq!(game.session().current_question_index(), 1);
}

#[test]
fn dropping_in_open_space_submits_nothing() {
    let bank = standard_bank();
    let mut game = MatchGame::start(bank.level(1), &bank);

    // Token starts at its home position, far from every bottom-row slot.
    game.process_input(MatchInput::Drop);
    assert!(game.session().feedback_outcome().is_none());
    assert_eq!(game.session().answer_log().len(), 0);
    assert_eq!(game.session().score(), 0);
}

#[test]
fn board_relays_out_for_each_new_question() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut game = MatchGame::start(bank.level(1), &bank);

    let first_count = game.targets().len();
    assert!(first_count >= 2);

    let correct = game.session().current_question().unwrap().correct_option;
    let slot = game.targets()[correct].position;
    move_token_to(&mut game, slot.x, slot.y);
    game.process_input(MatchInput::Drop);
    drive_feedback(&mut game, &mut tracker);

    // New question: one slot per option, token back at its home spot.
    let question = game.session().current_question().unwrap();
    assert_eq!(game.targets().len(), question.option_count());
    let home = shiksha::matching::Point::new(shiksha::constants::BOARD_WIDTH / 2.0, 2.0);
    assert_eq!(game.token(), home);
}

#[test]
fn full_match_playthrough_records_progress() {
    let bank = standard_bank();
    let mut tracker = ProgressTracker::new(bank.level_count());
    let mut game = MatchGame::start(bank.level(1), &bank);

    loop {
        if game.session().is_over() {
            break;
        }
        let correct = game.session().current_question().unwrap().correct_option;
        let slot = game.targets()[correct].position;
        move_token_to(&mut game, slot.x, slot.y);
        game.process_input(MatchInput::Drop);
        if drive_feedback(&mut game, &mut tracker) {
            break;
        }
    }

    assert_eq!(game.session().phase(), SessionPhase::Completed);
    assert!(tracker.record(1).completed);
    assert_eq!(tracker.record(1).best_score, 165);
    assert!(tracker.is_level_unlocked(2));
}
