//! FILENAME: core/persistence/src/lib.rs
//! Form persistence.
//!
//! Reads a worksheet out of an XLSX file into a `formfill_engine::Sheet`.
//! Filled values go back into a copy of the original workbook
//! (`write_into_template`), which keeps every sheet and all formatting.
//! `save_xlsx` writes a sheet on its own, values and merges only.

mod error;
mod xlsx_reader;
mod xlsx_template;
mod xlsx_writer;

pub use error::PersistenceError;
pub use xlsx_reader::{load_xlsx, load_xlsx_sheet};
pub use xlsx_template::write_into_template;
pub use xlsx_writer::save_xlsx;
