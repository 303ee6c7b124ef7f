//! Core data structures for cards, grids, and cell values.

pub mod card;
pub mod cell;
pub mod grid;

pub use card::Card;
pub use cell::CellValue;
pub use grid::{CardGrid, MarkedCells, GRID_SIZE};
