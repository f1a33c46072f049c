//! Level session state machine.
//!
//! One `LevelSession` drives one playthrough of one level: sequencing
//! questions, running the per-question countdown, applying the evaluator,
//! and closing out into the progress tracker. Everything that happens during
//! a tick is reported back through [`SessionTick`], so the UI layer can react
//! without the engine knowing anything about rendering.
//!
//! Wrong answers, timeouts and zero health are ordinary transitions here,
//! not errors. The only fatal misuse is driving a session outside the
//! in-progress phase, which is a caller bug and asserts.

use crate::bank::{LevelDefinition, Question, QuestionBank};
use crate::constants::{FEEDBACK_DURATION_MS, MAX_HEALTH};
use crate::engine::evaluator::{
    accuracy_percent, apply_damage, evaluate_battle_round, evaluate_round, RoundOutcome,
};
use crate::engine::progress::ProgressTracker;
use crate::engine::timer::CountdownTimer;

/// Which rule set the session runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Score and streak only.
    Standard,
    /// Adds player/opponent health; the session can end early.
    Battle,
}

/// Lifecycle phase. A session is created in progress; there is no
/// representable not-started state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    Completed,
    Failed,
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// All questions answered, or the opponent's health hit zero.
    Completed,
    /// Battle mode: the player's health hit zero.
    Failed,
}

/// Terminal report, produced exactly once per session, after the outcome has
/// been recorded in the progress tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionEnd {
    pub level_number: u32,
    pub final_score: u32,
    pub accuracy_percent: f64,
    pub outcome: SessionOutcome,
}

/// Everything that happened during one call into the session. The UI reads
/// this instead of subscribing to callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionTick {
    /// Set when an answer was applied this tick (only timeouts originate
    /// inside `tick`; explicit submissions report through `submit_answer`).
    pub answered: Option<RoundOutcome>,
    /// The answer above came from the countdown expiring.
    pub timed_out: bool,
    /// The cursor moved to the next question this tick.
    pub advanced: bool,
    pub session_end: Option<SessionEnd>,
}

/// Feedback display window between an answer and the next question.
#[derive(Debug, Clone, Copy)]
struct Feedback {
    remaining_ms: u64,
    outcome: RoundOutcome,
}

pub struct LevelSession {
    level_number: u32,
    mode: SessionMode,
    questions: Vec<Question>,
    phase: SessionPhase,
    paused: bool,
    current_question_index: usize,
    score: u32,
    streak: u32,
    answer_log: Vec<bool>,
    timer: CountdownTimer,
    feedback: Option<Feedback>,
    player_health: u32,
    opponent_health: u32,
}

impl LevelSession {
    /// Start a fresh session for a level. This is the only way in: the
    /// countdown for the first question begins immediately.
    pub fn start(level: &LevelDefinition, bank: &QuestionBank, mode: SessionMode) -> Self {
        let questions: Vec<Question> = bank
            .questions_for_level(level.level_number)
            .into_iter()
            .cloned()
            .collect();
        assert!(!questions.is_empty(), "level {} has no questions", level.level_number);

        let mut timer = CountdownTimer::idle();
        timer.start(questions[0].time_limit_seconds);

        Self {
            level_number: level.level_number,
            mode,
            questions,
            phase: SessionPhase::InProgress,
            paused: false,
            current_question_index: 0,
            score: 0,
            streak: 0,
            answer_log: Vec::new(),
            timer,
            feedback: None,
            player_health: MAX_HEALTH,
            opponent_health: MAX_HEALTH,
        }
    }

    /// Advance the session clock by `dt_ms`. Drives the feedback window and
    /// the countdown; a countdown expiry is handled exactly like a wrong
    /// submission. Does nothing while paused or after the terminal state.
    pub fn tick(&mut self, dt_ms: u64, tracker: &mut ProgressTracker) -> SessionTick {
        let mut result = SessionTick::default();
        if self.phase != SessionPhase::InProgress || self.paused {
            return result;
        }

        if let Some(feedback) = &mut self.feedback {
            feedback.remaining_ms = feedback.remaining_ms.saturating_sub(dt_ms);
            if feedback.remaining_ms == 0 {
                self.feedback = None;
                self.advance(tracker, &mut result);
            }
            return result;
        }

        if self.timer.advance(dt_ms) {
            let outcome = self.apply_answer(None);
            result.answered = Some(outcome);
            result.timed_out = true;
        }
        result
    }

    /// Submit the player's choice for the current question.
    ///
    /// Returns `None` (and changes nothing) when no option was selected, the
    /// session is paused, or the previous answer's feedback is still showing;
    /// a late submission after a timeout therefore cannot double-advance.
    /// Calling this on a finished session is a programmer error.
    pub fn submit_answer(&mut self, selected: Option<usize>) -> Option<RoundOutcome> {
        assert!(
            self.phase == SessionPhase::InProgress,
            "submit_answer on a finished session"
        );
        if self.paused || self.feedback.is_some() {
            return None;
        }
        let selected = selected?;
        Some(self.apply_answer(Some(selected)))
    }

    /// Freeze the countdown without touching the remaining time. Only valid
    /// while in progress.
    pub fn pause(&mut self) {
        assert!(self.phase == SessionPhase::InProgress, "pause on a finished session");
        if !self.paused {
            self.paused = true;
            self.timer.pause();
        }
    }

    /// Continue a paused countdown from where it left off.
    pub fn resume(&mut self) {
        assert!(self.phase == SessionPhase::InProgress, "resume on a finished session");
        if self.paused {
            self.paused = false;
            if self.feedback.is_none() {
                self.timer.resume();
            }
        }
    }

    /// Re-initialize against the same level, cancelling any pending
    /// countdown. Callable from any phase.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.phase = SessionPhase::InProgress;
        self.paused = false;
        self.current_question_index = 0;
        self.score = 0;
        self.streak = 0;
        self.answer_log.clear();
        self.feedback = None;
        self.player_health = MAX_HEALTH;
        self.opponent_health = MAX_HEALTH;
        self.timer.start(self.questions[0].time_limit_seconds);
    }

    fn apply_answer(&mut self, selected: Option<usize>) -> RoundOutcome {
        let question = &self.questions[self.current_question_index];
        let (round, to_opponent, to_player) = match self.mode {
            SessionMode::Standard => (evaluate_round(question, selected, self.streak), 0, 0),
            SessionMode::Battle => {
                let battle = evaluate_battle_round(question, selected, self.streak);
                (battle.round, battle.damage_to_opponent, battle.damage_to_player)
            }
        };

        self.score += round.points_awarded;
        self.streak = round.new_streak;
        self.answer_log.push(round.is_correct);
        if self.mode == SessionMode::Battle {
            self.opponent_health = apply_damage(self.opponent_health, to_opponent);
            self.player_health = apply_damage(self.player_health, to_player);
        }

        // Countdown stops for the feedback window; the next question (or the
        // terminal transition) restarts or cancels it.
        self.timer.cancel();
        self.feedback = Some(Feedback {
            remaining_ms: FEEDBACK_DURATION_MS,
            outcome: round,
        });
        round
    }

    fn advance(&mut self, tracker: &mut ProgressTracker, result: &mut SessionTick) {
        result.advanced = true;
        self.current_question_index += 1;

        if self.mode == SessionMode::Battle && self.player_health == 0 {
            self.finish(SessionOutcome::Failed, tracker, result);
        } else if self.mode == SessionMode::Battle && self.opponent_health == 0 {
            self.finish(SessionOutcome::Completed, tracker, result);
        } else if self.current_question_index >= self.questions.len() {
            self.finish(SessionOutcome::Completed, tracker, result);
        } else {
            self.timer
                .start(self.questions[self.current_question_index].time_limit_seconds);
        }
    }

    fn finish(
        &mut self,
        outcome: SessionOutcome,
        tracker: &mut ProgressTracker,
        result: &mut SessionTick,
    ) {
        self.timer.cancel();
        self.feedback = None;
        self.paused = false;
        self.phase = match outcome {
            SessionOutcome::Completed => SessionPhase::Completed,
            SessionOutcome::Failed => SessionPhase::Failed,
        };

        let accuracy = accuracy_percent(&self.answer_log);
        tracker.record_level_outcome(self.level_number, self.score, accuracy);
        result.session_end = Some(SessionEnd {
            level_number: self.level_number,
            final_score: self.score,
            accuracy_percent: accuracy,
            outcome,
        });
    }

    // ── Read-only snapshot, polled by the UI once per frame ──────────────

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != SessionPhase::InProgress
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Whole seconds left on the current question.
    pub fn time_remaining(&self) -> u32 {
        self.timer.remaining_seconds()
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    /// The question the cursor is on, or `None` past the end of the level.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn answer_log(&self) -> &[bool] {
        &self.answer_log
    }

    /// The outcome being shown in the feedback window, if one is active.
    pub fn feedback_outcome(&self) -> Option<RoundOutcome> {
        self.feedback.map(|f| f.outcome)
    }

    pub fn player_health(&self) -> u32 {
        self.player_health
    }

    pub fn opponent_health(&self) -> u32 {
        self.opponent_health
    }
}
