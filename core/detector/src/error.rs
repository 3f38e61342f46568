//! FILENAME: core/detector/src/error.rs

use thiserror::Error;

/// Structural failures that stop a detection pass.
/// Cells that merely fail the heuristics are never errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectionError {
    #[error("Merged regions {first} and {second} overlap")]
    OverlappingMerges { first: String, second: String },
}
