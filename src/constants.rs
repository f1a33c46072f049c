// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const MS_PER_SECOND: u64 = 1000;
pub const FEEDBACK_DURATION_MS: u64 = 1200;

// Round scoring
pub const BASE_POINTS: u32 = 10;
pub const STREAK_MULTIPLIER: u32 = 5;

// Battle mode
pub const MAX_HEALTH: u32 = 100;
pub const BASE_DAMAGE: u32 = 15;
pub const DAMAGE_SCALING: u32 = 5;
pub const COUNTER_DAMAGE: u32 = 20;

// Badge accuracy thresholds (percent)
pub const GOLD_THRESHOLD: f64 = 90.0;
pub const SILVER_THRESHOLD: f64 = 75.0;
pub const BRONZE_THRESHOLD: f64 = 60.0;

// Level layout
pub const LEVEL_COUNT: usize = 6;
pub const QUESTIONS_PER_LEVEL: usize = 6;

// Tile match board
pub const SNAP_RADIUS: f64 = 2.5;
pub const TOKEN_STEP: f64 = 1.0;
pub const BOARD_WIDTH: f64 = 40.0;
pub const BOARD_HEIGHT: f64 = 14.0;
