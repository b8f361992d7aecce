//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions
pub const GRID_ROWS: u8 = 6;
pub const GRID_COLS: u8 = 6;

/// Rows pre-filled by `initialize` (clamped by the level's row cap)
pub const INITIAL_FILLED_ROWS: u8 = 3;

/// Successful matches needed to advance a level
pub const MATCHES_PER_LEVEL: u32 = 6;

/// Highest reachable level
pub const MAX_LEVEL: u8 = 3;

/// Manual row additions allowed per level epoch
pub const MAX_ROW_ADDS: u32 = 4;

/// Sum two distinct pips must reach to match
pub const MATCH_SUM: u8 = 10;

/// Score trend capacity (oldest entry evicted beyond this)
pub const SCORE_TREND_CAP: usize = 24;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const LEVEL_RESET_DELAY_MS: u32 = 400;
pub const NOTICE_TTL_MS: u32 = 2000;

/// Days shown on the daily-challenge screen
pub const DAILY_DAYS: u8 = 30;

/// Largest pip value generated at a level: 9, 11, 13.
pub fn max_pip_for_level(level: u8) -> u8 {
    9 + (level.clamp(1, MAX_LEVEL) - 1) * 2
}

/// Maximum filled rows allowed at a level: 4, 5, 6.
pub fn max_rows_for_level(level: u8) -> u8 {
    match level {
        0 | 1 => 4,
        2 => 5,
        _ => GRID_ROWS,
    }
}

/// A grid coordinate (row-major, row 0 at the top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Why a match attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// One of the cells is empty
    EmptyCell,
    /// Pips are neither equal nor summing to ten
    NotAMatch,
    /// Board is locked while the deferred level reinit is pending
    LevelTransition,
}

impl MatchError {
    /// User-facing notice text
    pub fn notice(&self) -> &'static str {
        match self {
            MatchError::EmptyCell | MatchError::NotAMatch => "tiles must be equal or sum to 10",
            MatchError::LevelTransition => "level up!",
        }
    }
}

/// Result of a successful match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Points awarded for this match
    pub delta: u32,
    /// Whether this match triggered a level-up
    pub leveled_up: bool,
}

/// Fire-and-forget feedback cues dispatched on state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    MatchSuccess,
    MatchFail,
    LevelUp,
}

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    Daily,
}

/// Actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Select a tile / toggle a day
    Activate,
    AddRow,
    Restart,
    SwitchScreen,
    /// Clear daily progress (daily screen only)
    ClearDaily,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tables() {
        assert_eq!(max_pip_for_level(1), 9);
        assert_eq!(max_pip_for_level(2), 11);
        assert_eq!(max_pip_for_level(3), 13);
        // Out-of-range levels clamp rather than wrap.
        assert_eq!(max_pip_for_level(0), 9);
        assert_eq!(max_pip_for_level(9), 13);

        assert_eq!(max_rows_for_level(1), 4);
        assert_eq!(max_rows_for_level(2), 5);
        assert_eq!(max_rows_for_level(3), 6);
    }

    #[test]
    fn test_match_error_notices() {
        assert_eq!(
            MatchError::NotAMatch.notice(),
            "tiles must be equal or sum to 10"
        );
        assert_eq!(
            MatchError::EmptyCell.notice(),
            MatchError::NotAMatch.notice()
        );
    }
}
