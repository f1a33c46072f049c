//! Per-mode level completion, best scores, and badges.
//!
//! Progress lives in process memory only and resets when the program exits;
//! that mirrors the original game and is deliberate. The tracker is owned by
//! the caller and handed to sessions, never read from ambient state, so a
//! store-backed implementation could replace it without touching scoring.

use serde::{Deserialize, Serialize};

use crate::constants::{BRONZE_THRESHOLD, GOLD_THRESHOLD, SILVER_THRESHOLD};

/// Grade earned for a level, from accuracy on the best attempt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Badge {
    #[default]
    None,
    Bronze,
    Silver,
    Gold,
}

impl Badge {
    /// Badge tier for an accuracy percentage.
    pub fn for_accuracy(percent: f64) -> Self {
        if percent >= GOLD_THRESHOLD {
            Badge::Gold
        } else if percent >= SILVER_THRESHOLD {
            Badge::Silver
        } else if percent >= BRONZE_THRESHOLD {
            Badge::Bronze
        } else {
            Badge::None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Badge::None => "-",
            Badge::Bronze => "Bronze",
            Badge::Silver => "Silver",
            Badge::Gold => "Gold",
        }
    }
}

/// Outcome record for one level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LevelRecord {
    pub completed: bool,
    pub best_score: u32,
    pub badge: Badge,
}

/// Tracks a player's progress through one game mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressTracker {
    levels: Vec<LevelRecord>,
}

impl ProgressTracker {
    /// Fresh tracker: nothing completed, no scores, no badges.
    pub fn new(level_count: usize) -> Self {
        assert!(level_count > 0, "a game mode needs at least one level");
        Self {
            levels: vec![LevelRecord::default(); level_count],
        }
    }

    /// Level 1 is always open; every later level opens when its predecessor
    /// is completed. Pure query.
    pub fn is_level_unlocked(&self, level_number: u32) -> bool {
        let index = self.index_of(level_number);
        index == 0 || self.levels[index - 1].completed
    }

    /// Record the outcome of a finished session.
    ///
    /// Completion is idempotent, best score never decreases, and a badge is
    /// only ever upgraded; a worse replay keeps the earned badge.
    pub fn record_level_outcome(&mut self, level_number: u32, final_score: u32, accuracy_percent: f64) {
        let index = self.index_of(level_number);
        let record = &mut self.levels[index];
        record.completed = true;
        record.best_score = record.best_score.max(final_score);
        record.badge = record.badge.max(Badge::for_accuracy(accuracy_percent));
    }

    pub fn record(&self, level_number: u32) -> &LevelRecord {
        &self.levels[self.index_of(level_number)]
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn levels_completed(&self) -> usize {
        self.levels.iter().filter(|r| r.completed).count()
    }

    /// Share of this mode's levels completed, in percent.
    pub fn completion_percent(&self) -> f64 {
        self.levels_completed() as f64 / self.levels.len() as f64 * 100.0
    }

    /// Wipe back to the fresh state (explicit player reset).
    pub fn reset(&mut self) {
        for record in &mut self.levels {
            *record = LevelRecord::default();
        }
    }

    fn index_of(&self, level_number: u32) -> usize {
        assert!(
            level_number >= 1 && level_number as usize <= self.levels.len(),
            "level number {} out of range (1..={})",
            level_number,
            self.levels.len()
        );
        level_number as usize - 1
    }
}

/// Completion across several game modes combined, for the aggregate view.
pub fn combined_completion_percent(trackers: &[&ProgressTracker]) -> f64 {
    let total: usize = trackers.iter().map(|t| t.level_count()).sum();
    if total == 0 {
        return 0.0;
    }
    let completed: usize = trackers.iter().map(|t| t.levels_completed()).sum();
    completed as f64 / total as f64 * 100.0
}
