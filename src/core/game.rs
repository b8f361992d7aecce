//! Game state module - the match/score/level reducer
//!
//! Ties together grid, RNG, scoring, and the score trend. Every state-changing
//! operation either completes fully or leaves the prior state intact; the
//! deferred level reinit is the only timed behavior and is driven by the host
//! tick, never by blocking.

use arrayvec::ArrayVec;

use crate::core::{match_delta, Grid, ScoreTrend, SimpleRng};
use crate::types::{
    max_pip_for_level, max_rows_for_level, MatchError, MatchOutcome, Pos, SoundCue,
    GRID_COLS, INITIAL_FILLED_ROWS, LEVEL_RESET_DELAY_MS, MATCHES_PER_LEVEL, MAX_LEVEL,
    MAX_ROW_ADDS,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    score: u32,
    level: u8,
    match_streak: u32,
    rows_added: u32,
    trend: ScoreTrend,
    rng: SimpleRng,
    /// Countdown to the scheduled level reinit (None when no transition pending)
    pending_reset_ms: Option<u32>,
    /// Level the pending reinit will build
    pending_level: u8,
    /// Cues emitted since the last `take_effects` (consumed by the UI shell)
    effects: ArrayVec<SoundCue, 4>,
}

impl GameState {
    /// Create a new level-1 game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            grid: Grid::new(),
            score: 0,
            level: 1,
            match_streak: 0,
            rows_added: 0,
            trend: ScoreTrend::new(),
            rng: SimpleRng::new(seed),
            pending_reset_ms: None,
            pending_level: 1,
            effects: ArrayVec::new(),
        };
        state.initialize(1);
        state
    }

    /// Create a new game seeded from the system clock
    pub fn from_entropy() -> Self {
        let mut rng = SimpleRng::from_entropy();
        Self::new(rng.next_u32())
    }

    /// Rebuild the board for `level`: fill the first `min(3, max_rows(level))`
    /// rows with freshly drawn pips, zero the rest, and reset all counters.
    pub fn initialize(&mut self, level: u8) {
        let level = level.clamp(1, MAX_LEVEL);
        let max_pip = max_pip_for_level(level);
        let filled = INITIAL_FILLED_ROWS.min(max_rows_for_level(level));

        let mut grid = Grid::new();
        for r in 0..filled {
            for c in 0..GRID_COLS {
                grid.set(r, c, self.rng.next_pip(max_pip));
            }
        }

        self.grid = grid;
        self.level = level;
        self.score = 0;
        self.match_streak = 0;
        self.rows_added = 0;
        self.trend.reset();
        self.pending_reset_ms = None;
        self.pending_level = level;
    }

    /// Full restart to level 1
    pub fn reset_all(&mut self) {
        self.initialize(1);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for scenario setup in tests
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn match_streak(&self) -> u32 {
        self.match_streak
    }

    pub fn rows_added(&self) -> u32 {
        self.rows_added
    }

    pub fn trend(&self) -> &ScoreTrend {
        &self.trend
    }

    /// Whether the deferred level reinit is still counting down
    pub fn in_transition(&self) -> bool {
        self.pending_reset_ms.is_some()
    }

    /// Whether a manual row can currently be added.
    ///
    /// Recomputed from the counters on every call; it is a derived value with
    /// no side effects.
    pub fn can_add_row(&self) -> bool {
        self.pending_reset_ms.is_none()
            && self.rows_added < MAX_ROW_ADDS
            && self.grid.filled_rows() < max_rows_for_level(self.level)
    }

    /// Attempt to match the tiles at two distinct positions.
    ///
    /// Callers must filter self-selection (re-tapping the selected tile is a
    /// deselect, not a match attempt).
    ///
    /// On success both cells are cleared, every column is compacted upward,
    /// the delta is added to the score, and the streak advances; the sixth
    /// consecutive match schedules a level reinit after a short delay. On
    /// failure the state is untouched.
    pub fn try_match(&mut self, p1: Pos, p2: Pos) -> Result<MatchOutcome, MatchError> {
        debug_assert!(p1 != p2, "self-selection must be filtered by the caller");

        if self.pending_reset_ms.is_some() {
            return Err(MatchError::LevelTransition);
        }

        let a = self.grid.at(p1).unwrap_or(0);
        let b = self.grid.at(p2).unwrap_or(0);
        let delta = match match_delta(a, b) {
            Ok(delta) => delta,
            Err(err) => {
                self.emit(SoundCue::MatchFail);
                return Err(err);
            }
        };

        self.grid.set(p1.row, p1.col, 0);
        self.grid.set(p2.row, p2.col, 0);
        self.grid.compact_columns();

        self.score += delta;
        self.trend.push(self.score);
        self.match_streak += 1;
        self.emit(SoundCue::MatchSuccess);

        let mut leveled_up = false;
        if self.match_streak >= MATCHES_PER_LEVEL {
            self.match_streak = 0;
            if self.level < MAX_LEVEL {
                self.level += 1;
                leveled_up = true;
                // Score/streak/rows reset when the deferred reinit lands,
                // not here; the board stays visible through the delay.
                self.pending_level = self.level;
                self.pending_reset_ms = Some(LEVEL_RESET_DELAY_MS);
                self.emit(SoundCue::LevelUp);
            }
        }

        Ok(MatchOutcome { delta, leveled_up })
    }

    /// Add a manual row: discard row 0, shift the grid up, and draw a fresh
    /// bottom row. Returns false (no state change) when the row budget or the
    /// level's row cap blocks it.
    pub fn add_row(&mut self) -> bool {
        if !self.can_add_row() {
            return false;
        }

        let new_row = self.rng.next_row(max_pip_for_level(self.level));
        self.grid.shift_up(new_row);
        self.rows_added += 1;
        true
    }

    /// Advance timers. Returns true when the pending level reinit fired this
    /// tick (the board has been rebuilt and any selection is stale).
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(remaining) = self.pending_reset_ms else {
            return false;
        };

        let remaining = remaining.saturating_sub(elapsed_ms);
        if remaining > 0 {
            self.pending_reset_ms = Some(remaining);
            return false;
        }

        let level = self.pending_level;
        self.initialize(level);
        true
    }

    /// Take and clear the cues emitted since the last call
    pub fn take_effects(&mut self) -> ArrayVec<SoundCue, 4> {
        std::mem::take(&mut self.effects)
    }

    fn emit(&mut self, cue: SoundCue) {
        // Effects are drained every input; dropping on overflow is harmless.
        let _ = self.effects.try_push(cue);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
