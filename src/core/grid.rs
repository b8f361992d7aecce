//! Grid module - manages the game grid
//!
//! The grid is a 6x6 array where each cell holds `0` (empty) or a positive
//! pip value. Uses a flat array for cache locality and cheap copies.
//! Coordinates: (row, col) with row 0 at the top; gravity pulls tiles upward
//! toward row 0 after matches.

use crate::types::{Pos, GRID_COLS, GRID_ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_ROWS * GRID_COLS) as usize;

/// The game grid - 6 rows x 6 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of pip values, row-major order (row * COLS + col)
    cells: [u8; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [0; GRID_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: u8, col: u8) -> Option<usize> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }
        Some((row as usize) * (GRID_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        GRID_ROWS
    }

    pub fn cols(&self) -> u8 {
        GRID_COLS
    }

    /// Get pip value at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: u8, col: u8) -> Option<u8> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Get pip value at a position. Returns None if out of bounds.
    pub fn at(&self, pos: Pos) -> Option<u8> {
        self.get(pos.row, pos.col)
    }

    /// Set pip value at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: u8, col: u8, value: u8) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if a cell holds a tile (in bounds and non-zero)
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        matches!(self.get(row, col), Some(v) if v > 0)
    }

    /// Count rows containing at least one tile
    pub fn filled_rows(&self) -> u8 {
        let cols = GRID_COLS as usize;
        (0..GRID_ROWS as usize)
            .filter(|&r| self.cells[r * cols..(r + 1) * cols].iter().any(|&v| v > 0))
            .count() as u8
    }

    /// Count tiles on the grid
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v > 0).count()
    }

    /// Count tiles on the top row (the row discarded by `shift_up`)
    pub fn top_row_tiles(&self) -> usize {
        self.cells[..GRID_COLS as usize]
            .iter()
            .filter(|&&v| v > 0)
            .count()
    }

    /// Slide every tile in each column toward row 0, preserving top-to-bottom
    /// order within the column. Zeros end up below all tiles; columns never mix.
    pub fn compact_columns(&mut self) {
        let cols = GRID_COLS as usize;
        for c in 0..cols {
            let mut write = 0usize;
            for r in 0..GRID_ROWS as usize {
                let v = self.cells[r * cols + c];
                if v > 0 {
                    self.cells[write * cols + c] = v;
                    write += 1;
                }
            }
            for r in write..GRID_ROWS as usize {
                self.cells[r * cols + c] = 0;
            }
        }
    }

    /// Discard row 0, shift every row up by one, and place `new_row` at the
    /// bottom. Uses `copy_within` for the row moves.
    pub fn shift_up(&mut self, new_row: [u8; GRID_COLS as usize]) {
        let cols = GRID_COLS as usize;
        self.cells.copy_within(cols.., 0);
        let bottom = (GRID_ROWS as usize - 1) * cols;
        self.cells[bottom..].copy_from_slice(&new_row);
    }

    /// Check the compaction invariant: no empty cell above a tile in any column
    pub fn is_compacted(&self) -> bool {
        let cols = GRID_COLS as usize;
        for c in 0..cols {
            let mut seen_gap = false;
            for r in 0..GRID_ROWS as usize {
                if self.cells[r * cols + c] == 0 {
                    seen_gap = true;
                } else if seen_gap {
                    return false;
                }
            }
        }
        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Copy the grid into a 2D array (for snapshots and rendering)
    pub fn to_rows(&self) -> [[u8; GRID_COLS as usize]; GRID_ROWS as usize] {
        let mut out = [[0u8; GRID_COLS as usize]; GRID_ROWS as usize];
        for (r, row) in out.iter_mut().enumerate() {
            let start = r * GRID_COLS as usize;
            row.copy_from_slice(&self.cells[start..start + GRID_COLS as usize]);
        }
        out
    }

    /// Build a grid from a 2D array (scenario setup in tests)
    pub fn from_rows(rows: [[u8; GRID_COLS as usize]; GRID_ROWS as usize]) -> Self {
        let mut grid = Self::new();
        for (r, row) in rows.iter().enumerate() {
            let start = r * GRID_COLS as usize;
            grid.cells[start..start + GRID_COLS as usize].copy_from_slice(row);
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 5), Some(5));
        assert_eq!(Grid::index(1, 0), Some(6));
        assert_eq!(Grid::index(5, 5), Some(35));
        assert_eq!(Grid::index(6, 0), None);
        assert_eq!(Grid::index(0, 6), None);
    }

    #[test]
    fn test_compact_preserves_column_order() {
        let mut grid = Grid::new();
        grid.set(1, 2, 7);
        grid.set(3, 2, 4);
        grid.set(5, 2, 9);

        grid.compact_columns();

        assert_eq!(grid.get(0, 2), Some(7));
        assert_eq!(grid.get(1, 2), Some(4));
        assert_eq!(grid.get(2, 2), Some(9));
        assert_eq!(grid.get(3, 2), Some(0));
        assert!(grid.is_compacted());
    }

    #[test]
    fn test_shift_up_discards_top_row() {
        let mut grid = Grid::new();
        for c in 0..GRID_COLS {
            grid.set(0, c, 1);
            grid.set(1, c, 2);
        }

        grid.shift_up([9; GRID_COLS as usize]);

        for c in 0..GRID_COLS {
            assert_eq!(grid.get(0, c), Some(2));
            assert_eq!(grid.get(5, c), Some(9));
        }
    }

    #[test]
    fn test_filled_rows_ignores_empty_rows() {
        let mut grid = Grid::new();
        assert_eq!(grid.filled_rows(), 0);
        grid.set(0, 3, 5);
        grid.set(4, 1, 2);
        assert_eq!(grid.filled_rows(), 2);
    }

    #[test]
    fn test_to_rows_roundtrip() {
        let mut rows = [[0u8; 6]; 6];
        rows[2][3] = 8;
        rows[5][0] = 1;
        let grid = Grid::from_rows(rows);
        assert_eq!(grid.to_rows(), rows);
        assert_eq!(grid.tile_count(), 2);
    }
}
