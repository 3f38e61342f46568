//! FILENAME: core/engine/src/coord.rs
//! PURPOSE: Cell coordinates and rectangular ranges in A1 notation.
//! CONTEXT: Rows and columns are 1-based everywhere in this crate, matching
//! the way form sheets are read: "A1" is (row 1, col 1), "AA100" is
//! (row 100, col 27). Ranges use the canonical "B1:D1" encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// Highest addressable row in an xlsx worksheet.
pub const MAX_ROWS: u32 = 1_048_576;

/// Highest addressable column in an xlsx worksheet ("XFD").
pub const MAX_COLS: u32 = 16_384;

/// Converts a column string (e.g., "A", "AA", "abc") to a 1-based column index.
/// "A" -> 1, "B" -> 2, ..., "Z" -> 26, "AA" -> 27.
/// Returns None for empty input, non-letters or overflow.
pub fn col_to_index(col_str: &str) -> Option<u32> {
    if col_str.is_empty() {
        return None;
    }
    let mut result: u32 = 0;
    for c in col_str.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        result = result.checked_mul(26)?.checked_add(digit)?;
    }
    Some(result)
}

/// Converts a 1-based column index to a column string.
/// 1 -> "A", 26 -> "Z", 27 -> "AA". Index 0 yields an empty string.
pub fn index_to_col(col_index: u32) -> String {
    let mut result = String::new();
    let mut n = col_index;
    while n > 0 {
        let remainder = (n - 1) % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }
    result
}

// ============================================================================
// CELL REFERENCE
// ============================================================================

/// A single cell coordinate. Ordering is row-major (row first, then column).
/// Only constructed through validation, so row and column are always in
/// `1..=MAX_ROWS` and `1..=MAX_COLS`. Serialized as A1 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellRef {
    row: u32,
    col: u32,
}

impl CellRef {
    /// Builds a coordinate, validating it against sheet limits.
    pub fn new(row: u32, col: u32) -> Result<Self, SheetError> {
        if row < 1 || col < 1 || row > MAX_ROWS || col > MAX_COLS {
            return Err(SheetError::OutOfBounds { row, col });
        }
        Ok(CellRef { row, col })
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    /// Moves by a signed offset. Returns None when the result leaves the sheet.
    pub fn offset(&self, row_offset: i64, col_offset: i64) -> Option<CellRef> {
        let row = i64::from(self.row) + row_offset;
        let col = i64::from(self.col) + col_offset;
        if row < 1 || col < 1 || row > i64::from(MAX_ROWS) || col > i64::from(MAX_COLS) {
            return None;
        }
        Some(CellRef {
            row: row as u32,
            col: col as u32,
        })
    }

    /// The cell immediately to the left, if any.
    pub fn left(&self) -> Option<CellRef> {
        self.offset(0, -1)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", index_to_col(self.col), self.row)
    }
}

impl FromStr for CellRef {
    type Err = SheetError;

    /// Parses "B12" (case-insensitive, `$` anchors ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SheetError::InvalidReference(s.to_string());
        let cleaned: String = s.trim().chars().filter(|c| *c != '$').collect();
        let split = cleaned
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (letters, digits) = cleaned.split_at(split);
        let col = col_to_index(letters).ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let row: u32 = digits.parse().map_err(|_| invalid())?;
        CellRef::new(row, col)
    }
}

impl TryFrom<String> for CellRef {
    type Error = SheetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CellRef> for String {
    fn from(at: CellRef) -> Self {
        at.to_string()
    }
}

// ============================================================================
// CELL RANGE
// ============================================================================

/// A rectangular span of cells, boundaries inclusive. Serialized as "B1:D3".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellRange {
    min_row: u32,
    min_col: u32,
    max_row: u32,
    max_col: u32,
}

impl CellRange {
    /// Builds a range from two corners. Corners may be given in any order.
    pub fn new(first: CellRef, last: CellRef) -> Self {
        CellRange {
            min_row: first.row.min(last.row),
            min_col: first.col.min(last.col),
            max_row: first.row.max(last.row),
            max_col: first.col.max(last.col),
        }
    }

    /// Builds a range from raw 1-based bounds, validating them.
    pub fn from_bounds(
        min_row: u32,
        min_col: u32,
        max_row: u32,
        max_col: u32,
    ) -> Result<Self, SheetError> {
        let first = CellRef::new(min_row, min_col)?;
        let last = CellRef::new(max_row, max_col)?;
        if min_row > max_row || min_col > max_col {
            return Err(SheetError::InvalidRange(format!(
                "{}:{}",
                first, last
            )));
        }
        Ok(CellRange::new(first, last))
    }

    pub fn top_left(&self) -> CellRef {
        CellRef {
            row: self.min_row,
            col: self.min_col,
        }
    }

    pub fn bottom_right(&self) -> CellRef {
        CellRef {
            row: self.max_row,
            col: self.max_col,
        }
    }

    pub fn contains(&self, at: CellRef) -> bool {
        at.row >= self.min_row
            && at.row <= self.max_row
            && at.col >= self.min_col
            && at.col <= self.max_col
    }

    pub fn overlaps(&self, other: &CellRange) -> bool {
        !(self.max_row < other.min_row
            || self.min_row > other.max_row
            || self.max_col < other.min_col
            || self.min_col > other.max_col)
    }

    pub fn is_single_cell(&self) -> bool {
        self.min_row == self.max_row && self.min_col == self.max_col
    }

}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.top_left(), self.bottom_right())
    }
}

impl FromStr for CellRange {
    type Err = SheetError;

    /// Parses "B1:D3". A bare "B1" is read as a one-cell range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((first, last)) => {
                let first: CellRef = first
                    .parse()
                    .map_err(|_| SheetError::InvalidRange(s.to_string()))?;
                let last: CellRef = last
                    .parse()
                    .map_err(|_| SheetError::InvalidRange(s.to_string()))?;
                Ok(CellRange::new(first, last))
            }
            None => {
                let only: CellRef = s
                    .parse()
                    .map_err(|_| SheetError::InvalidRange(s.to_string()))?;
                Ok(CellRange::new(only, only))
            }
        }
    }
}

impl TryFrom<String> for CellRange {
    type Error = SheetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CellRange> for String {
    fn from(range: CellRange) -> Self {
        range.to_string()
    }
}
