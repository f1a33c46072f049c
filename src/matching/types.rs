//! Tile-match game data structures.
//!
//! Same engine as the quiz game, different surface: the learner drags an
//! answer token onto one of the option slots instead of pressing a number.

use serde::{Deserialize, Serialize};

/// A point on the (abstract) match board. Board coordinates are unit cells,
/// not terminal cells; the renderer scales them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// UI-agnostic input actions for the match board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchInput {
    Up,
    Down,
    Left,
    Right,
    /// Release the token where it is; snaps to a slot if close enough.
    Drop,
}

/// One drop slot, bound to an option of the current question.
#[derive(Debug, Clone, Copy)]
pub struct TargetSlot {
    pub option_index: usize,
    pub position: Point,
}
