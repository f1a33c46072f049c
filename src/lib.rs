//! Shiksha - Terminal Educational Quiz Game Library
//!
//! Exposes the game logic for testing, the simulator, and the terminal
//! front end: the static question bank, the level progress and scoring
//! engine, and the two game variants built on it.

pub mod bank;
pub mod build_info;
pub mod constants;
pub mod engine;
pub mod matching;
pub mod simulator;
pub mod ui;
