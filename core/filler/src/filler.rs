//! FILENAME: core/filler/src/filler.rs
//! PURPOSE: The fill pass: one write per detected field, never overwriting.
//! CONTEXT: Every field is attempted. A missing value or a failed write is
//! recorded and the pass moves on to the next field.

use detector::DetectionResult;
use engine::{CellRef, Sheet};
use log::{debug, warn};
use serde::Serialize;

use crate::resolve::resolve_writable_cell;
use crate::value::FieldValues;

/// Outcome of a fill pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FillResult {
    pub filled_count: usize,
    pub skipped_count: usize,
    /// Diagnostics in field order.
    pub errors: Vec<String>,
    /// Cells that received a value, in field order.
    pub written: Vec<CellRef>,
}

impl FillResult {
    /// True when no field produced a diagnostic.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    fn skip_with(&mut self, message: String) {
        warn!(target: "filler", "{}", message);
        self.errors.push(message);
        self.skipped_count += 1;
    }
}

/// Writes values into the detected targets that are still empty.
pub fn fill(sheet: &mut Sheet, detection: &DetectionResult, values: &FieldValues) -> FillResult {
    let mut result = FillResult::default();

    for field in detection.fields() {
        let Some(value) = values.get(&field.label) else {
            result.skip_with(format!("'{}' not found in data", field.label));
            continue;
        };
        let text = value.to_cell_text();

        let cell = match resolve_writable_cell(sheet, &field.target, detection.merge_map()) {
            Ok(cell) => cell,
            Err(e) => {
                result.skip_with(format!(
                    "Error getting writable cell for '{}' ({}): {}",
                    field.label, field.target, e
                ));
                continue;
            }
        };

        if !sheet.is_cell_empty(cell) {
            debug!(target: "filler", "{:?}: {} already has content", field.label, cell);
            result.skipped_count += 1;
            continue;
        }

        match sheet.set_value(cell, text) {
            Ok(()) => {
                debug!(target: "filler", "{:?} -> {}", field.label, cell);
                result.filled_count += 1;
                result.written.push(cell);
            }
            Err(e) => result.skip_with(format!("Error filling '{}': {}", field.label, e)),
        }
    }

    debug!(
        target: "filler",
        "filled {}, skipped {}, {} diagnostics",
        result.filled_count, result.skipped_count, result.errors.len()
    );
    result
}
