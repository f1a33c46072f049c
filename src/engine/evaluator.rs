//! Pure round-scoring math.
//!
//! These functions have no side effects; a timeout is a valid input
//! (`selected = None`), not an error. Both the interactive game and the
//! simulator use them, so results always match real gameplay.

use crate::bank::Question;
use crate::constants::*;

/// Result of evaluating one submitted (or timed-out) answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub is_correct: bool,
    /// Zero for an incorrect or timed-out answer. Never negative.
    pub points_awarded: u32,
    /// Consecutive-correct count after this round.
    pub new_streak: u32,
}

/// Round outcome plus the health deltas used by battle mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    pub round: RoundOutcome,
    /// Applied to the opponent on a correct answer.
    pub damage_to_opponent: u32,
    /// Counter-attack applied to the player on a miss or timeout.
    pub damage_to_player: u32,
}

/// Evaluate a single answer.
///
/// `selected = None` means the countdown expired with no choice made and
/// scores identically to a wrong answer. A `Some` index outside the option
/// list is a caller bug and fails fast.
pub fn evaluate_round(question: &Question, selected: Option<usize>, streak: u32) -> RoundOutcome {
    if let Some(index) = selected {
        assert!(
            index < question.option_count(),
            "option index {} out of range for question {} ({} options)",
            index,
            question.id,
            question.option_count()
        );
    }

    let is_correct = selected == Some(question.correct_option);
    let new_streak = if is_correct { streak + 1 } else { 0 };
    let points_awarded = if is_correct {
        BASE_POINTS + new_streak * STREAK_MULTIPLIER
    } else {
        0
    };

    RoundOutcome {
        is_correct,
        points_awarded,
        new_streak,
    }
}

/// Battle-mode evaluation: scoring as in [`evaluate_round`], plus damage.
/// A correct answer strikes the opponent, scaling with the streak; a miss
/// or timeout lets the opponent counter-attack for a fixed amount.
pub fn evaluate_battle_round(
    question: &Question,
    selected: Option<usize>,
    streak: u32,
) -> BattleOutcome {
    let round = evaluate_round(question, selected, streak);
    let (damage_to_opponent, damage_to_player) = if round.is_correct {
        (BASE_DAMAGE + round.new_streak * DAMAGE_SCALING, 0)
    } else {
        (0, COUNTER_DAMAGE)
    };

    BattleOutcome {
        round,
        damage_to_opponent,
        damage_to_player,
    }
}

/// Apply damage to a health value, saturating at zero. Health therefore
/// always stays within `[0, MAX_HEALTH]` given it starts there.
pub fn apply_damage(health: u32, damage: u32) -> u32 {
    health.saturating_sub(damage)
}

/// Accuracy over an answer log, in percent. Returns 0.0 for an empty log
/// (an abandoned session is a legitimate state, not a division error).
pub fn accuracy_percent(answer_log: &[bool]) -> f64 {
    if answer_log.is_empty() {
        return 0.0;
    }
    let correct = answer_log.iter().filter(|a| **a).count();
    correct as f64 / answer_log.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::standard_bank;

    fn first_question() -> Question {
        standard_bank().questions_for_level(1)[0].clone()
    }

    #[test]
    fn correct_answer_extends_streak_and_scores() {
        let q = first_question();
        let outcome = evaluate_round(&q, Some(q.correct_option), 0);
        assert!(outcome.is_correct);
        assert_eq!(outcome.new_streak, 1);
        assert_eq!(outcome.points_awarded, BASE_POINTS + STREAK_MULTIPLIER);
    }

    #[test]
    fn streak_bonus_grows_with_streak() {
        let q = first_question();
        let outcome = evaluate_round(&q, Some(q.correct_option), 4);
        assert_eq!(outcome.new_streak, 5);
        assert_eq!(outcome.points_awarded, BASE_POINTS + 5 * STREAK_MULTIPLIER);
    }

    #[test]
    fn wrong_answer_resets_streak_and_scores_zero() {
        let q = first_question();
        let wrong = (q.correct_option + 1) % q.option_count();
        let outcome = evaluate_round(&q, Some(wrong), 7);
        assert!(!outcome.is_correct);
        assert_eq!(outcome.new_streak, 0);
        assert_eq!(outcome.points_awarded, 0);
    }

    #[test]
    fn timeout_scores_identically_to_wrong_answer() {
        let q = first_question();
        let wrong = (q.correct_option + 1) % q.option_count();
        let timed_out = evaluate_round(&q, None, 3);
        let missed = evaluate_round(&q, Some(wrong), 3);
        assert_eq!(timed_out, missed);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_option_index_panics() {
        let q = first_question();
        evaluate_round(&q, Some(q.option_count()), 0);
    }

    #[test]
    fn battle_damage_scales_with_streak() {
        let q = first_question();
        let outcome = evaluate_battle_round(&q, Some(q.correct_option), 2);
        assert_eq!(outcome.damage_to_opponent, BASE_DAMAGE + 3 * DAMAGE_SCALING);
        assert_eq!(outcome.damage_to_player, 0);
    }

    #[test]
    fn battle_miss_takes_fixed_counter_damage() {
        let q = first_question();
        let outcome = evaluate_battle_round(&q, None, 5);
        assert_eq!(outcome.damage_to_opponent, 0);
        assert_eq!(outcome.damage_to_player, COUNTER_DAMAGE);
    }

    #[test]
    fn apply_damage_clamps_at_zero() {
        assert_eq!(apply_damage(MAX_HEALTH, 30), MAX_HEALTH - 30);
        assert_eq!(apply_damage(10, 10_000), 0);
        assert_eq!(apply_damage(0, u32::MAX), 0);
    }

    #[test]
    fn accuracy_is_zero_for_empty_log() {
        assert_eq!(accuracy_percent(&[]), 0.0);
    }

    #[test]
    fn accuracy_stays_within_bounds() {
        assert_eq!(accuracy_percent(&[true, true]), 100.0);
        assert_eq!(accuracy_percent(&[false, false]), 0.0);
        assert_eq!(accuracy_percent(&[true, false, true, false]), 50.0);
    }
}
