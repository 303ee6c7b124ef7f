//! Grid types: the column-major display grid and the marked-cell matrix.

use crate::models::CellValue;
use serde::{Deserialize, Serialize};

/// Width and height of a cartela grid.
pub const GRID_SIZE: usize = 5;

/// A 5×5 cartela grid in **column-major** order (`grid[col][row]`).
///
/// This is the display form: each outer array holds one letter column
/// (B, I, N, G, O). Canonical source layouts are row-major and are
/// transposed into this form exactly once, at card construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardGrid(pub [[CellValue; GRID_SIZE]; GRID_SIZE]);

impl CardGrid {
    /// Builds a column-major grid by transposing a row-major layout.
    ///
    /// `out[col][row] = rows[row][col]` for all positions.
    #[must_use]
    pub fn from_row_major(rows: &[[CellValue; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut cols = [[CellValue::Free; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                cols[c][r] = *cell;
            }
        }
        Self(cols)
    }

    /// Gets the cell at the given display position (row, col).
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> CellValue {
        self.0[col][row]
    }

    /// Checks whether the cell at the given display position is free.
    #[must_use]
    pub const fn is_free(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_free()
    }

    /// Counts the free cells in the grid.
    #[must_use]
    pub fn free_cell_count(&self) -> usize {
        self.0
            .iter()
            .flat_map(|col| col.iter())
            .filter(|cell| cell.is_free())
            .count()
    }
}

/// A 5×5 boolean matrix of user markings in **row-major** order.
///
/// All-false at card creation. The free center cell is tracked separately
/// and never flips an entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkedCells(pub [[bool; GRID_SIZE]; GRID_SIZE]);

impl MarkedCells {
    /// Creates an all-false matrix.
    #[must_use]
    pub const fn new() -> Self {
        Self([[false; GRID_SIZE]; GRID_SIZE])
    }

    /// Checks whether the cell at (row, col) is marked.
    #[must_use]
    pub const fn is_marked(&self, row: usize, col: usize) -> bool {
        self.0[row][col]
    }

    /// Flips the marking at (row, col).
    pub fn toggle(&mut self, row: usize, col: usize) {
        self.0[row][col] = !self.0[row][col];
    }

    /// Checks whether every entry is false.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.0.iter().all(|row| row.iter().all(|m| !m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_major_fixture() -> [[CellValue; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[CellValue::Free; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = CellValue::Number((r * GRID_SIZE + c + 1) as u8);
            }
        }
        rows[2][2] = CellValue::Free;
        rows
    }

    #[test]
    fn test_from_row_major_transposes() {
        let rows = row_major_fixture();
        let grid = CardGrid::from_row_major(&rows);

        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                assert_eq!(grid.0[c][r], rows[r][c]);
                assert_eq!(grid.cell(r, c), rows[r][c]);
            }
        }
    }

    #[test]
    fn test_free_cell_position_survives_transpose() {
        let grid = CardGrid::from_row_major(&row_major_fixture());
        assert!(grid.is_free(2, 2));
        assert_eq!(grid.free_cell_count(), 1);
    }

    #[test]
    fn test_marked_cells_starts_clear() {
        let marks = MarkedCells::new();
        assert!(marks.is_clear());
        assert!(!marks.is_marked(0, 0));
    }

    #[test]
    fn test_marked_cells_toggle() {
        let mut marks = MarkedCells::new();
        marks.toggle(1, 3);
        assert!(marks.is_marked(1, 3));
        assert!(!marks.is_clear());

        marks.toggle(1, 3);
        assert!(marks.is_clear());
    }

    #[test]
    fn test_grid_serde_round_trip() {
        let grid = CardGrid::from_row_major(&row_major_fixture());
        let json = serde_json::to_string(&grid).unwrap();
        let back: CardGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
