//! Tile-match game logic: token movement, proximity snap, submission.

use super::types::{MatchInput, Point, TargetSlot};
use crate::bank::{LevelDefinition, QuestionBank};
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, SNAP_RADIUS, TOKEN_STEP};
use crate::engine::{LevelSession, ProgressTracker, SessionMode, SessionTick};

/// Nearest target within `radius` of `drop`, by index; `None` when every
/// target is too far. Pure geometry, independent of any rendering.
pub fn snap_target(drop: Point, targets: &[Point], radius: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, target) in targets.iter().enumerate() {
        let d = drop.distance(target);
        if d <= radius && best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// A level playthrough presented as a drag-and-drop board. Owns the session;
/// all scoring, streaks and progression go through the shared engine.
pub struct MatchGame {
    session: LevelSession,
    token: Point,
    home: Point,
    targets: Vec<TargetSlot>,
}

impl MatchGame {
    pub fn start(level: &LevelDefinition, bank: &QuestionBank) -> Self {
        let session = LevelSession::start(level, bank, SessionMode::Standard);
        let home = Point::new(BOARD_WIDTH / 2.0, 2.0);
        let mut game = Self {
            session,
            token: home,
            home,
            targets: Vec::new(),
        };
        game.layout_targets();
        game
    }

    /// Slot positions for the current question, spread evenly along the
    /// bottom of the board.
    fn layout_targets(&mut self) {
        self.targets.clear();
        let Some(question) = self.session.current_question() else {
            return;
        };
        let count = question.option_count();
        for i in 0..count {
            let x = (i as f64 + 1.0) * BOARD_WIDTH / (count as f64 + 1.0);
            self.targets.push(TargetSlot {
                option_index: i,
                position: Point::new(x, BOARD_HEIGHT - 2.0),
            });
        }
    }

    /// Process one input action. A drop within [`SNAP_RADIUS`] of a slot
    /// submits that slot's option; a drop in open space just sends the token
    /// home and submits nothing.
    pub fn process_input(&mut self, input: MatchInput) {
        if self.session.is_over() || self.session.is_paused() {
            return;
        }
        match input {
            MatchInput::Up => self.move_token(0.0, -TOKEN_STEP),
            MatchInput::Down => self.move_token(0.0, TOKEN_STEP),
            MatchInput::Left => self.move_token(-TOKEN_STEP, 0.0),
            MatchInput::Right => self.move_token(TOKEN_STEP, 0.0),
            MatchInput::Drop => self.drop_token(),
        }
    }

    fn move_token(&mut self, dx: f64, dy: f64) {
        self.token.x = (self.token.x + dx).clamp(0.0, BOARD_WIDTH);
        self.token.y = (self.token.y + dy).clamp(0.0, BOARD_HEIGHT);
    }

    fn drop_token(&mut self) {
        let positions: Vec<Point> = self.targets.iter().map(|t| t.position).collect();
        if let Some(slot) = snap_target(self.token, &positions, SNAP_RADIUS) {
            let option_index = self.targets[slot].option_index;
            self.session.submit_answer(Some(option_index));
        }
        self.token = self.home;
    }

    /// Advance the clock. Re-lays the board whenever the session moved on to
    /// a new question.
    pub fn tick(&mut self, dt_ms: u64, tracker: &mut ProgressTracker) -> SessionTick {
        let result = self.session.tick(dt_ms, tracker);
        if result.advanced {
            self.layout_targets();
            self.token = self.home;
        }
        result
    }

    pub fn session(&self) -> &LevelSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut LevelSession {
        &mut self.session
    }

    pub fn token(&self) -> Point {
        self.token
    }

    pub fn targets(&self) -> &[TargetSlot] {
        &self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_picks_nearest_target_in_radius() {
        let targets = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(8.0, 0.0)];
        assert_eq!(snap_target(Point::new(3.0, 0.5), &targets, 2.5), Some(1));
        assert_eq!(snap_target(Point::new(0.4, 0.0), &targets, 2.5), Some(0));
    }

    #[test]
    fn snap_rejects_out_of_radius_drops() {
        let targets = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        assert_eq!(snap_target(Point::new(5.0, 5.0), &targets, 2.0), None);
    }

    #[test]
    fn snap_on_empty_target_list_is_none() {
        assert_eq!(snap_target(Point::new(1.0, 1.0), &[], 10.0), None);
    }

    #[test]
    fn snap_boundary_is_inclusive() {
        let targets = [Point::new(3.0, 0.0)];
        assert_eq!(snap_target(Point::new(0.0, 0.0), &targets, 3.0), Some(0));
        assert_eq!(snap_target(Point::new(0.0, 0.0), &targets, 2.999), None);
    }

    #[test]
    fn token_movement_is_clamped_to_board() {
        let bank = crate::bank::standard_bank();
        let mut game = MatchGame::start(bank.level(1), &bank);
        for _ in 0..200 {
            game.process_input(MatchInput::Left);
        }
        assert_eq!(game.token().x, 0.0);
        for _ in 0..200 {
            game.process_input(MatchInput::Up);
        }
        assert_eq!(game.token().y, 0.0);
    }
}
