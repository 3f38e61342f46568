//! FILENAME: core/filler/src/lib.rs
//! Form filling.
//!
//! Takes the fields found by `formfill-detector`, asks a value source for
//! their values and writes each value into its target cell, provided the
//! cell is still empty.

mod error;
mod filler;
mod pipeline;
mod resolve;
mod source;
mod value;

pub use error::{FillError, FormError, ValueSourceError};
pub use filler::{fill, FillResult};
pub use pipeline::{run, RunReport};
pub use resolve::resolve_writable_cell;
pub use source::{clean_json_response, request_values, StaticValueSource, ValueSource};
pub use value::{FieldValue, FieldValues};
