//! Question bank data structures.
//!
//! Content is static and immutable once the bank is built; the engine only
//! ever reads it.

use serde::Serialize;

/// Display language for all learner-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    English,
    Hindi,
    Odia,
}

impl Language {
    /// All languages in display order.
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Odia];

    /// Display name, written in the language itself.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Odia => "ଓଡ଼ିଆ",
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Language::English)
    }
}

/// Curriculum subject a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subject {
    Sets,
    LinearEquations,
    RationalNumbers,
    CropScience,
    Nutrition,
    PlantBiology,
}

impl Subject {
    pub fn name(&self) -> &'static str {
        match self {
            Subject::Sets => "Sets",
            Subject::LinearEquations => "Linear Equations",
            Subject::RationalNumbers => "Rational Numbers",
            Subject::CropScience => "Crop Science",
            Subject::Nutrition => "Nutrition",
            Subject::PlantBiology => "Plant Biology",
        }
    }
}

/// Question difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// One string in all three supported languages. Content lives in the
/// binary, so serialization is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    pub hi: &'static str,
    pub od: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, hi: &'static str, od: &'static str) -> Self {
        Self { en, hi, od }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Hindi => self.hi,
            Language::Odia => self.od,
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    /// Unique within the bank.
    pub id: u16,
    pub subject: Subject,
    pub difficulty: Difficulty,
    /// Countdown budget for answering, always positive.
    pub time_limit_seconds: u32,
    pub prompt: LocalizedText,
    pub options: Vec<LocalizedText>,
    /// 0-based index into `options`.
    pub correct_option: usize,
}

impl Question {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// An ordered block of questions with one unlock predecessor.
#[derive(Debug, Clone, Serialize)]
pub struct LevelDefinition {
    /// 1-based sequential identifier.
    pub level_number: u32,
    pub subject: Subject,
    pub title: LocalizedText,
    /// Ordered question references for this level.
    pub question_ids: Vec<u16>,
    /// Level that must be completed first; `None` for the first level.
    pub unlock_requirement: Option<u32>,
}

impl LevelDefinition {
    pub fn question_count(&self) -> usize {
        self.question_ids.len()
    }
}
