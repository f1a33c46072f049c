//! Level progress and scoring engine.
//!
//! Pure state-transition logic shared by the quiz-battle and tile-match
//! games: round evaluation, per-question countdown, the level session state
//! machine, and per-mode progress tracking. No rendering, no I/O.

pub mod evaluator;
pub mod progress;
pub mod session;
pub mod timer;

pub use evaluator::{
    accuracy_percent, apply_damage, evaluate_battle_round, evaluate_round, BattleOutcome,
    RoundOutcome,
};
pub use progress::{combined_completion_percent, Badge, LevelRecord, ProgressTracker};
pub use session::{
    LevelSession, SessionEnd, SessionMode, SessionOutcome, SessionPhase, SessionTick,
};
pub use timer::CountdownTimer;
