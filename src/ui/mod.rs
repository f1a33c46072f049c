//! Terminal rendering. No game rules live here; scenes draw read-only
//! snapshots of engine state.

pub mod battle_scene;
pub mod home_scene;
pub mod level_select_scene;
pub mod match_scene;
pub mod results_scene;
pub mod widgets;

/// Which of the two games the player is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    QuizBattle,
    TileMatch,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::QuizBattle, GameMode::TileMatch];

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::QuizBattle => "Quiz Battle",
            GameMode::TileMatch => "Tile Match",
        }
    }
}
