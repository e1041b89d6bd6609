// Board constants
pub const DEFAULT_GRID_SIZE: usize = 8;
pub const MAX_GRID_SIZE: usize = 20;

// Health constants
pub const STARTING_HEALTH: u32 = 100;
pub const DEFAULT_ENEMY_HIT_PENALTY: u32 = 10;

// Leaderboard constants
pub const LEADERBOARD_DIR: &str = "leaderboard";
pub const HIGH_SCORES_FILE: &str = "high_scores.json";
pub const LOG_FILE: &str = "gridgame.log";

// Input polling interval for the terminal loop
pub const POLL_INTERVAL_MS: u64 = 50;
