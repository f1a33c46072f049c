//! Static question bank: levels, questions, and lookup.

pub mod data;
pub mod types;

pub use data::standard_bank;
pub use types::{Difficulty, Language, LevelDefinition, LocalizedText, Question, Subject};

use std::collections::HashMap;

/// Owns all question and level content for one curriculum.
///
/// Built once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: HashMap<u16, Question>,
    levels: Vec<LevelDefinition>,
}

impl QuestionBank {
    /// Builds a bank from raw tables. Panics on malformed content; the bank
    /// is authored in-tree, so a bad table is a build-time bug.
    pub fn new(questions: Vec<Question>, levels: Vec<LevelDefinition>) -> Self {
        let bank = Self {
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            levels,
        };
        bank.validate();
        bank
    }

    /// Looks up a question by id. Ids come from level definitions, so a miss
    /// is a programmer error.
    pub fn question(&self, id: u16) -> &Question {
        self.questions
            .get(&id)
            .unwrap_or_else(|| panic!("unknown question id {}", id))
    }

    /// Ordered questions for a level. `level_number` is 1-based.
    pub fn questions_for_level(&self, level_number: u32) -> Vec<&Question> {
        self.level(level_number)
            .question_ids
            .iter()
            .map(|id| self.question(*id))
            .collect()
    }

    pub fn level(&self, level_number: u32) -> &LevelDefinition {
        assert!(
            level_number >= 1 && level_number as usize <= self.levels.len(),
            "level number {} out of range (1..={})",
            level_number,
            self.levels.len()
        );
        &self.levels[level_number as usize - 1]
    }

    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Enforces bank invariants:
    /// - every correct-option index is within its option list,
    /// - every time limit is positive,
    /// - levels are numbered 1..=N and chain strictly linearly,
    /// - every referenced question id exists.
    fn validate(&self) {
        for q in self.questions.values() {
            assert!(
                q.correct_option < q.options.len(),
                "question {}: correct option {} out of range ({} options)",
                q.id,
                q.correct_option,
                q.options.len()
            );
            assert!(q.time_limit_seconds > 0, "question {}: zero time limit", q.id);
            assert!(q.options.len() >= 2, "question {}: needs at least 2 options", q.id);
        }
        for (i, level) in self.levels.iter().enumerate() {
            let expected = i as u32 + 1;
            assert_eq!(level.level_number, expected, "levels must be numbered sequentially");
            let expected_req = if expected == 1 { None } else { Some(expected - 1) };
            assert_eq!(
                level.unlock_requirement, expected_req,
                "level {} breaks the linear unlock chain",
                expected
            );
            assert!(!level.question_ids.is_empty(), "level {} has no questions", expected);
            for id in &level.question_ids {
                assert!(self.questions.contains_key(id), "level {} references unknown question {}", expected, id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_is_valid() {
        // `QuestionBank::new` runs validation; building is the assertion.
        let bank = standard_bank();
        assert_eq!(bank.level_count(), crate::constants::LEVEL_COUNT);
    }

    #[test]
    fn every_level_has_full_question_block() {
        let bank = standard_bank();
        for level in bank.levels() {
            assert_eq!(
                level.question_count(),
                crate::constants::QUESTIONS_PER_LEVEL,
                "level {}",
                level.level_number
            );
        }
    }

    #[test]
    fn question_lookup_matches_level_order() {
        let bank = standard_bank();
        let level = bank.level(1);
        let questions = bank.questions_for_level(1);
        for (id, q) in level.question_ids.iter().zip(&questions) {
            assert_eq!(*id, q.id);
        }
    }

    #[test]
    fn all_prompts_localized_in_three_languages() {
        let bank = standard_bank();
        for level in bank.levels() {
            for q in bank.questions_for_level(level.level_number) {
                for lang in Language::ALL {
                    assert!(!q.prompt.get(lang).is_empty(), "question {}", q.id);
                    for opt in &q.options {
                        assert!(!opt.get(lang).is_empty(), "question {}", q.id);
                    }
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_level_panics() {
        let bank = standard_bank();
        bank.level(99);
    }
}
