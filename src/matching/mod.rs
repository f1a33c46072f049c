//! Drag-and-drop tile-match game built on the shared scoring engine.

pub mod logic;
pub mod types;

pub use logic::{snap_target, MatchGame};
pub use types::{MatchInput, Point, TargetSlot};
