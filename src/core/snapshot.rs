//! Plain-data snapshot of the game state, for rendering and observation.

use arrayvec::ArrayVec;

use crate::core::GameState;
use crate::types::{GRID_COLS, GRID_ROWS, SCORE_TREND_CAP};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: [[u8; GRID_COLS as usize]; GRID_ROWS as usize],
    pub score: u32,
    pub level: u8,
    pub match_streak: u32,
    pub rows_added: u32,
    pub can_add_row: bool,
    pub in_transition: bool,
    pub trend: ArrayVec<u32, SCORE_TREND_CAP>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0u8; GRID_COLS as usize]; GRID_ROWS as usize];
        self.score = 0;
        self.level = 1;
        self.match_streak = 0;
        self.rows_added = 0;
        self.can_add_row = false;
        self.in_transition = false;
        self.trend.clear();
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; GRID_COLS as usize]; GRID_ROWS as usize],
            score: 0,
            level: 1,
            match_streak: 0,
            rows_added: 0,
            can_add_row: false,
            in_transition: false,
            trend: ArrayVec::new(),
        }
    }
}

impl GameState {
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid().to_rows();
        out.score = self.score();
        out.level = self.level();
        out.match_streak = self.match_streak();
        out.rows_added = self.rows_added();
        out.can_add_row = self.can_add_row();
        out.in_transition = self.in_transition();
        out.trend.clear();
        out.trend
            .try_extend_from_slice(self.trend().as_slice())
            .ok();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
