//! FILENAME: core/detector/src/detector.rs
//! PURPOSE: The detection pass: label candidates to writable target cells.
//! CONTEXT: One row-major scan over the stored cells. Row-major order is the
//! tie-break for every "first occurrence wins" rule below, which keeps the
//! result deterministic for a given sheet.

use engine::{CellRef, Sheet};
use log::{debug, trace};

use crate::config::DetectorConfig;
use crate::error::DetectionError;
use crate::label::{classify_label, ends_with_colon};
use crate::merge_map::MergeMap;
use crate::model::{DetectionResult, FieldTarget, FormField};

/// Probe order around a label: right, below, left.
const DIRECTIONS: [(i64, i64); 3] = [(0, 1), (1, 0), (0, -1)];

/// Finds where the value for the label at `label_cell` should be written.
///
/// Labels sitting on a placeholder or on a merge top-left are treated as
/// values and yield `None`. For each direction the neighbouring cell is
/// checked; a neighbour inside a merge region resolves to the whole region
/// when the region's top-left is empty, and rules the direction out
/// otherwise.
pub fn find_field_cell(sheet: &Sheet, label_cell: CellRef, merge_map: &MergeMap) -> Option<FieldTarget> {
    if sheet.is_placeholder(label_cell) || merge_map.is_top_left(label_cell) {
        return None;
    }

    for (row_offset, col_offset) in DIRECTIONS {
        let Some(candidate) = label_cell.offset(row_offset, col_offset) else {
            continue;
        };

        if let Some(region) = merge_map.region_containing(candidate) {
            if sheet.is_cell_empty(region.top_left()) {
                return Some(FieldTarget::Region(region));
            }
            continue;
        }

        if sheet.is_cell_empty(candidate) {
            return Some(FieldTarget::Cell(candidate));
        }
    }

    None
}

/// Scans the sheet and maps every detected label to its target.
///
/// Only structural problems with the merge topology are errors. An empty
/// result is a normal outcome; check [`DetectionResult::is_empty`].
pub fn detect_fields(sheet: &Sheet, config: &DetectorConfig) -> Result<DetectionResult, DetectionError> {
    let merge_map = MergeMap::build(sheet)?;
    let mut fields: Vec<FormField> = Vec::new();

    for (at, cell) in sheet.cells_row_major() {
        let Some(raw) = cell.value.as_text() else {
            continue;
        };
        if raw.is_empty() || sheet.is_placeholder(at) || merge_map.is_top_left(at) {
            continue;
        }

        let label = raw.trim();
        let verdict = classify_label(label, config);
        if !verdict.is_accepted() {
            trace!(target: "detector", "{} {:?} not a label: {:?}", at, label, verdict);
            continue;
        }

        // Long text on the left means this is probably a continuation of a
        // value, unless the colon says otherwise.
        if let Some(left_text) = at.left().and_then(|left| sheet.text(left)) {
            if left_text.trim().chars().count() > config.min_left_cell_text_length
                && !ends_with_colon(label)
            {
                debug!(target: "detector", "{} {:?} suppressed by left neighbour", at, label);
                continue;
            }
        }

        let Some(target) = find_field_cell(sheet, at, &merge_map) else {
            debug!(target: "detector", "{} {:?} has no empty neighbour", at, label);
            continue;
        };

        let top_left = target.top_left();
        if !sheet.is_cell_empty(top_left) {
            continue;
        }

        if let Some(pos) = fields.iter().position(|f| f.target.top_left() == top_left) {
            if ends_with_colon(label) && !ends_with_colon(&fields[pos].label) {
                let evicted = fields.remove(pos);
                debug!(
                    target: "detector",
                    "{:?} takes {} from {:?}", label, top_left, evicted.label
                );
            } else {
                debug!(
                    target: "detector",
                    "{:?} loses {} to {:?}", label, top_left, fields[pos].label
                );
                continue;
            }
        }

        // Runs after the target check, so a repeated label may already have
        // evicted the holder of its target before being dropped itself.
        if fields.iter().any(|f| f.label == label) {
            debug!(target: "detector", "{} {:?} duplicates an earlier label", at, label);
            continue;
        }

        debug!(target: "detector", "{} {:?} -> {}", at, label, target);
        fields.push(FormField {
            label: label.to_string(),
            label_cell: at,
            target,
        });
    }

    debug!(
        target: "detector",
        "sheet {:?}: {} fields, {} merged regions", sheet.name, fields.len(), merge_map.len()
    );
    Ok(DetectionResult::new(fields, merge_map))
}
