//! Cartela layout catalog and resolver.
//!
//! This module provides access to the embedded table of canonical cartela
//! layouts and resolves a cartela number into the column-major display
//! grid. Resolution is total: unknown numbers and malformed static data
//! degrade through a fallback chain instead of producing errors.

use crate::models::{CardGrid, CellValue, GRID_SIZE};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// A canonical layout as stored in the source table: row-major.
pub type RowMajorLayout = [[CellValue; GRID_SIZE]; GRID_SIZE];

/// Table schema of the embedded `cartelas.json` asset.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[allow(dead_code)]
    version: String,
    cartelas: HashMap<String, RowMajorLayout>,
}

/// Built-in fallback grid, already column-major.
///
/// Matches the transposition of cartela 1 so that the two deepest levels
/// of the fallback chain agree on what the user sees.
const FALLBACK_GRID: CardGrid = {
    use CellValue::{Free, Number};
    CardGrid([
        [Number(8), Number(3), Number(13), Number(6), Number(2)],
        [Number(19), Number(29), Number(28), Number(26), Number(18)],
        [Number(37), Number(42), Free, Number(32), Number(40)],
        [Number(59), Number(54), Number(60), Number(58), Number(48)],
        [Number(75), Number(68), Number(71), Number(64), Number(70)],
    ])
};

/// Read-only catalog of canonical cartela layouts keyed by number.
///
/// The table is embedded in the binary at compile time. The catalog is an
/// injected dependency of everything that resolves layouts, so tests can
/// construct one from fixture data instead.
#[derive(Debug, Clone)]
pub struct CartelaCatalog {
    layouts: HashMap<u32, RowMajorLayout>,
}

impl CartelaCatalog {
    /// Loads the catalog from the embedded JSON asset.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("cartelas.json");
        let file: CatalogFile =
            serde_json::from_str(json_data).context("Failed to parse embedded cartelas.json")?;

        // Keys are JSON object keys, so strings; unparsable ones are dropped
        let layouts = file
            .cartelas
            .into_iter()
            .filter_map(|(key, layout)| key.parse::<u32>().ok().map(|id| (id, layout)))
            .collect();

        Ok(Self { layouts })
    }

    /// Loads the embedded catalog, degrading to an empty table on failure.
    ///
    /// With an empty table every resolution lands on the built-in fallback
    /// grid, so the application keeps working.
    #[must_use]
    pub fn load_or_empty() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to built-in cartela data: {e:#}");
            Self {
                layouts: HashMap::new(),
            }
        })
    }

    /// Creates a catalog from explicit layout data (for tests).
    #[must_use]
    pub fn from_layouts(layouts: HashMap<u32, RowMajorLayout>) -> Self {
        Self { layouts }
    }

    /// Checks whether the given cartela number has a canonical layout.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.layouts.contains_key(&id)
    }

    /// Number of layouts in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Checks whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Iterates over all (number, row-major layout) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&u32, &RowMajorLayout)> {
        self.layouts.iter()
    }

    /// Resolves a cartela number to its column-major display grid.
    ///
    /// Fallback chain: the layout for `id`, else the layout for 1, else a
    /// hardcoded built-in grid. Never fails, whatever the input.
    #[must_use]
    pub fn resolve(&self, id: u32) -> CardGrid {
        self.layouts
            .get(&id)
            .or_else(|| self.layouts.get(&1))
            .map_or(FALLBACK_GRID, CardGrid::from_row_major)
    }
}
