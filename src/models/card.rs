//! Card data structure: a user's instance of a cartela layout.

use crate::models::{CardGrid, MarkedCells};
use serde::{Deserialize, Serialize};

/// A user-held cartela card.
///
/// # Invariants
///
/// - `id` is unique across the process lifetime and immutable after creation
/// - `numbers` holds the column-major transposition of the source layout,
///   fixed at construction and never re-derived
/// - the free cell is never reflected in `marked_cells`
///
/// JSON field names (`id`, `name`, `numbers`, `expanded`, `markedCells`)
/// match the historical saved-data format exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier, assigned at creation time.
    pub id: i64,
    /// Human-readable label (defaults to "Cartela {n}").
    pub name: String,
    /// Display grid, column-major.
    pub numbers: CardGrid,
    /// Expanded/collapsed flag inherited from an earlier card list UI.
    /// Carries no meaning here but stays in the serialized form.
    #[serde(default)]
    pub expanded: bool,
    /// User markings, row-major, all-false at creation.
    pub marked_cells: MarkedCells,
}

impl Card {
    /// Creates a new card for the given cartela number with a fresh grid
    /// and no markings.
    #[must_use]
    pub fn new(id: i64, cartela_number: u32, numbers: CardGrid) -> Self {
        Self {
            id,
            name: format!("Cartela {cartela_number}"),
            numbers,
            expanded: false,
            marked_cells: MarkedCells::new(),
        }
    }

    /// Flips the marking at (row, col) unless the cell is free.
    ///
    /// Returns true if the marking changed. Free cells are never togglable.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        if self.numbers.is_free(row, col) {
            return false;
        }
        self.marked_cells.toggle(row, col);
        true
    }

    /// Clears all markings, leaving the grid and identity untouched.
    pub fn reset_marks(&mut self) {
        self.marked_cells = MarkedCells::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CellValue, GRID_SIZE};

    fn test_grid() -> CardGrid {
        let mut rows = [[CellValue::Free; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = CellValue::Number((r * GRID_SIZE + c + 1) as u8);
            }
        }
        rows[2][2] = CellValue::Free;
        CardGrid::from_row_major(&rows)
    }

    #[test]
    fn test_new_card_defaults() {
        let card = Card::new(1, 42, test_grid());
        assert_eq!(card.id, 1);
        assert_eq!(card.name, "Cartela 42");
        assert!(!card.expanded);
        assert!(card.marked_cells.is_clear());
    }

    #[test]
    fn test_toggle_cell() {
        let mut card = Card::new(1, 42, test_grid());
        assert!(card.toggle_cell(0, 1));
        assert!(card.marked_cells.is_marked(0, 1));

        assert!(card.toggle_cell(0, 1));
        assert!(card.marked_cells.is_clear());
    }

    #[test]
    fn test_toggle_free_cell_is_refused() {
        let mut card = Card::new(1, 42, test_grid());
        assert!(!card.toggle_cell(2, 2));
        assert!(card.marked_cells.is_clear());
    }

    #[test]
    fn test_reset_marks_keeps_identity() {
        let mut card = Card::new(7, 42, test_grid());
        card.toggle_cell(0, 0);
        card.toggle_cell(4, 4);

        let grid_before = card.numbers;
        card.reset_marks();

        assert!(card.marked_cells.is_clear());
        assert_eq!(card.id, 7);
        assert_eq!(card.numbers, grid_before);
    }

    #[test]
    fn test_serialized_field_names() {
        let card = Card::new(1, 42, test_grid());
        let json = serde_json::to_string(&card).unwrap();

        assert!(json.contains("\"id\""));
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"numbers\""));
        assert!(json.contains("\"expanded\""));
        assert!(json.contains("\"markedCells\""));
        assert!(json.contains("\"FREE\""));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut card = Card::new(1, 42, test_grid());
        card.toggle_cell(3, 2);

        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn test_deserialize_without_expanded_field() {
        // Blobs from the simpler card list variant may omit "expanded"
        let card = Card::new(1, 5, test_grid());
        let mut value = serde_json::to_value(&card).unwrap();
        value.as_object_mut().unwrap().remove("expanded");

        let back: Card = serde_json::from_value(value).unwrap();
        assert!(!back.expanded);
    }
}
