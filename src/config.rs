use crate::range::Range;

pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 100;
pub const DEFAULT_RANGE: Range = Range::new_unchecked(DEFAULT_MIN, DEFAULT_MAX);

/// Separator between the two bounds of a custom interval, e.g. `1-50`.
pub const RANGE_DELIMITER: char = '-';

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "GUESS_LOG";

/// Settings for one process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Range offered when the player presses enter, and after every restart.
    pub default_range: Range,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_range: DEFAULT_RANGE,
            seed: None,
        }
    }
}
