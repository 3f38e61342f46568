//! FILENAME: core/filler/src/error.rs

use detector::DetectionError;
use engine::SheetError;
use thiserror::Error;

/// Per-field problems during a fill pass. These end up as diagnostics in
/// the fill report; they never abort the pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FillError {
    #[error("resolved cell {cell} is covered by merged region {region}")]
    Unresolvable { cell: String, region: String },

    #[error(transparent)]
    Write(#[from] SheetError),
}

/// The value source could not produce a mapping at all.
#[derive(Error, Debug)]
pub enum ValueSourceError {
    #[error("Value source returned invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Value source returned {0} instead of a JSON object")]
    NotAnObject(&'static str),

    #[error("Value source unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a whole detect-then-fill run, by kind.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Field detection failed: {0}")]
    Detection(#[from] DetectionError),

    #[error(transparent)]
    ValueSource(#[from] ValueSourceError),
}
