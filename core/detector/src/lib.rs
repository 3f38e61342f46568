//! FILENAME: core/detector/src/lib.rs
//! Form field detection.
//!
//! Scans a sheet for label cells ("Nombre:", "Fecha de nacimiento") and
//! resolves, for each one, the adjacent empty cell or merge region that
//! should receive its value.

pub mod config;
pub mod detector;
pub mod error;
pub mod label;
pub mod merge_map;
pub mod model;

pub use config::{DetectorConfig, DEFAULT_EMAIL_KEYWORDS, DEFAULT_KEYWORDS};
pub use detector::{detect_fields, find_field_cell};
pub use error::DetectionError;
pub use label::{classify_label, ends_with_colon, looks_like_label, LabelVerdict};
pub use merge_map::MergeMap;
pub use model::{DetectionResult, FieldTarget, FormField};
