//! FILENAME: core/engine/src/sheet.rs
//! PURPOSE: A single worksheet: sparse cell storage plus merge regions.
//! CONTEXT: Cells live in a HashMap keyed by 1-based coordinates so that a
//! mostly empty form costs nothing for its blank area. Inside a merge region
//! only the top-left cell is addressable; every other member is a
//! placeholder that reads as empty and refuses writes.

use std::collections::HashMap;

use crate::cell::{Cell, CellValue};
use crate::coord::{CellRange, CellRef};
use crate::error::SheetError;

/// The Sheet struct holds the state of one worksheet.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,

    /// Sparse storage: keys are 1-based coordinates. Blank cells are not stored.
    cells: HashMap<CellRef, Cell>,

    /// Merge regions in the order they were declared.
    merged_regions: Vec<CellRange>,

    /// Tracks the highest row currently in use (0 when the sheet is blank).
    pub max_row: u32,

    /// Tracks the highest column currently in use (0 when the sheet is blank).
    pub max_col: u32,
}

impl Sheet {
    /// Creates a new, empty Sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Sheet {
            name: name.into(),
            cells: HashMap::new(),
            merged_regions: Vec::new(),
            max_row: 0,
            max_col: 0,
        }
    }

    // ========================================================================
    // CELL ACCESS
    // ========================================================================

    /// Sets the value at a coordinate. Writing `CellValue::Empty` clears it.
    /// Fails for placeholder cells of a merge region.
    pub fn set_value(&mut self, at: CellRef, value: impl Into<CellValue>) -> Result<(), SheetError> {
        if self.is_placeholder(at) {
            return Err(SheetError::PlaceholderWrite(at));
        }
        let value = value.into();
        if value == CellValue::Empty {
            self.clear_cell(at);
            return Ok(());
        }
        if at.row() > self.max_row {
            self.max_row = at.row();
        }
        if at.col() > self.max_col {
            self.max_col = at.col();
        }
        self.cells.insert(at, Cell { value });
        Ok(())
    }

    /// Convenience setter taking raw 1-based indices.
    pub fn set(&mut self, row: u32, col: u32, value: impl Into<CellValue>) -> Result<(), SheetError> {
        self.set_value(CellRef::new(row, col)?, value)
    }

    /// Retrieves the cell at a coordinate.
    /// Returns None for blank cells and for merge placeholders.
    pub fn get_cell(&self, at: CellRef) -> Option<&Cell> {
        if self.is_placeholder(at) {
            return None;
        }
        self.cells.get(&at)
    }

    /// Shortcut for the stored value at a coordinate.
    pub fn value(&self, at: CellRef) -> Option<&CellValue> {
        self.get_cell(at).map(|c| &c.value)
    }

    /// Shortcut for the text stored at a coordinate, if it holds text.
    pub fn text(&self, at: CellRef) -> Option<&str> {
        self.value(at).and_then(CellValue::as_text)
    }

    /// Removes a cell from the sheet.
    /// If the cell was at a boundary (max_row or max_col), recalculates bounds.
    pub fn clear_cell(&mut self, at: CellRef) {
        let was_at_boundary = at.row() == self.max_row || at.col() == self.max_col;
        self.cells.remove(&at);

        if was_at_boundary {
            self.recalculate_bounds();
        }
    }

    /// Recalculates max_row and max_col by scanning all cells.
    pub fn recalculate_bounds(&mut self) {
        self.max_row = self.cells.keys().map(|at| at.row()).max().unwrap_or(0);
        self.max_col = self.cells.keys().map(|at| at.col()).max().unwrap_or(0);
    }

    /// Number of stored (non-blank) cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All stored cells in row-major order (top to bottom, left to right).
    pub fn cells_row_major(&self) -> Vec<(CellRef, &Cell)> {
        let mut cells: Vec<(CellRef, &Cell)> =
            self.cells.iter().map(|(at, cell)| (*at, cell)).collect();
        cells.sort_by_key(|(at, _)| *at);
        cells
    }

    // ========================================================================
    // MERGE REGIONS
    // ========================================================================

    /// Merges a range. The top-left cell keeps its content; all other cells
    /// in the range are cleared. Returns false when there was nothing to
    /// merge (single cell or an identical region already present).
    pub fn merge_cells(&mut self, range: CellRange) -> bool {
        if range.is_single_cell() || self.merged_regions.contains(&range) {
            return false;
        }

        let master = range.top_left();
        let covered: Vec<CellRef> = self
            .cells
            .keys()
            .filter(|at| range.contains(**at) && **at != master)
            .copied()
            .collect();
        for at in covered {
            self.cells.remove(&at);
        }
        self.recalculate_bounds();

        self.merged_regions.push(range);
        true
    }

    /// Dissolves the merge region containing `at`, returning it.
    pub fn unmerge_cells(&mut self, at: CellRef) -> Option<CellRange> {
        let index = self.merged_regions.iter().position(|r| r.contains(at))?;
        Some(self.merged_regions.remove(index))
    }

    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged_regions
    }

    /// The first merge region containing a coordinate.
    pub fn region_containing(&self, at: CellRef) -> Option<&CellRange> {
        self.merged_regions.iter().find(|r| r.contains(at))
    }

    /// True iff the coordinate is a non-top-left member of a merge region.
    pub fn is_placeholder(&self, at: CellRef) -> bool {
        self.merged_regions
            .iter()
            .any(|r| r.contains(at) && r.top_left() != at)
    }

    /// True for placeholders, blank cells and whitespace-only text.
    pub fn is_cell_empty(&self, at: CellRef) -> bool {
        if self.is_placeholder(at) {
            return true;
        }
        self.cells.get(&at).map_or(true, |c| c.value.is_blank())
    }
}
