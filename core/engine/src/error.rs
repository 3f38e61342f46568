//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

use crate::coord::CellRef;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SheetError {
    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Cell ({row}, {col}) is outside the sheet")]
    OutOfBounds { row: u32, col: u32 },

    #[error("Cell {0} is covered by a merged region and cannot be written")]
    PlaceholderWrite(CellRef),
}
