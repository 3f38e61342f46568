//! FILENAME: core/filler/src/pipeline.rs
//! PURPOSE: Detect, ask the value source, fill: one sheet, one pass each.

use detector::{detect_fields, DetectionResult, DetectorConfig};
use engine::Sheet;
use log::info;

use crate::error::FormError;
use crate::filler::{fill, FillResult};
use crate::source::{request_values, ValueSource};

/// What a run found and what it wrote.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub detection: DetectionResult,
    /// All zero when nothing was detected; the source is not consulted then.
    pub fill: FillResult,
}

/// Runs detection and filling over one sheet.
///
/// Detection failures and value-source failures come back as distinct
/// [`FormError`] kinds; per-field problems are in the report.
pub fn run<S: ValueSource + ?Sized>(
    sheet: &mut Sheet,
    config: &DetectorConfig,
    source: &S,
) -> Result<RunReport, FormError> {
    let detection = detect_fields(sheet, config)?;
    info!(target: "filler", "detected {} fields in {:?}", detection.len(), sheet.name);

    if detection.is_empty() {
        return Ok(RunReport {
            detection,
            fill: FillResult::default(),
        });
    }

    let values = request_values(source, &detection.labels())?;
    info!(target: "filler", "value source answered {} labels", values.len());

    let fill = fill(sheet, &detection, &values);
    Ok(RunReport { detection, fill })
}
