//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the sheet model.
//! CONTEXT: Re-exports public types used by the detector, the filler and
//! the persistence layer.

pub mod cell;
pub mod coord;
pub mod error;
pub mod sheet;

// Re-export commonly used types at the crate root
pub use cell::{display_value, format_number, Cell, CellError, CellValue};
pub use coord::{col_to_index, index_to_col, CellRange, CellRef, MAX_COLS, MAX_ROWS};
pub use error::SheetError;
pub use sheet::Sheet;
