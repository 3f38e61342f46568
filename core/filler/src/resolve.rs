//! FILENAME: core/filler/src/resolve.rs
//! PURPOSE: Maps a detected target to the one cell that may be written.
//! CONTEXT: The merge map captured at detection time is preferred, but the
//! live sheet is consulted whenever the two disagree, so a topology change
//! between detection and filling degrades to a best-effort cell instead of
//! a failure.

use detector::{FieldTarget, MergeMap};
use engine::{CellRef, Sheet};

use crate::error::FillError;

/// Returns the authoritative writable cell for a target.
///
/// * Region known to the merge map: the mapped top-left.
/// * Region unknown to the map: an identical live region's top-left, else
///   the region's nominal top-left.
/// * Single cell that is now a placeholder: the top-left of the region that
///   covers it.
///
/// Fails only when the chosen cell is itself covered by a live merge region.
pub fn resolve_writable_cell(
    sheet: &Sheet,
    target: &FieldTarget,
    merge_map: &MergeMap,
) -> Result<CellRef, FillError> {
    let cell = match target {
        FieldTarget::Region(range) => merge_map.top_left_of(range).unwrap_or_else(|| {
            sheet
                .merged_regions()
                .iter()
                .find(|live| *live == range)
                .map(|live| live.top_left())
                .unwrap_or_else(|| range.top_left())
        }),
        FieldTarget::Cell(at) => {
            if sheet.is_placeholder(*at) {
                merge_map
                    .region_containing(*at)
                    .or_else(|| sheet.region_containing(*at).copied())
                    .map(|region| region.top_left())
                    .unwrap_or(*at)
            } else {
                *at
            }
        }
    };

    if sheet.is_placeholder(cell) {
        let region = sheet
            .region_containing(cell)
            .map(|r| r.to_string())
            .unwrap_or_default();
        return Err(FillError::Unresolvable {
            cell: cell.to_string(),
            region,
        });
    }

    Ok(cell)
}
