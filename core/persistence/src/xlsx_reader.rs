//! FILENAME: core/persistence/src/xlsx_reader.rs
//! PURPOSE: XLSX -> Sheet.
//! CONTEXT: Merge regions are applied before any value so that a value
//! stored under a covered cell (some writers keep one) is dropped instead
//! of overwriting the region's top-left.

use calamine::{open_workbook, CellErrorType, Data, Reader, Xlsx};
use engine::{CellError, CellRange, CellRef, CellValue, Sheet, SheetError};
use log::{debug, info};
use std::path::Path;

use crate::PersistenceError;

/// Loads the first worksheet of the workbook at `path`.
pub fn load_xlsx(path: &Path) -> Result<Sheet, PersistenceError> {
    load(path, None)
}

/// Loads the worksheet called `name`.
pub fn load_xlsx_sheet(path: &Path, name: &str) -> Result<Sheet, PersistenceError> {
    load(path, Some(name))
}

fn load(path: &Path, wanted: Option<&str>) -> Result<Sheet, PersistenceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let sheet_name = match wanted {
        Some(name) => sheet_names
            .iter()
            .find(|s| s.as_str() == name)
            .cloned()
            .ok_or_else(|| PersistenceError::SheetNotFound(name.to_string()))?,
        None => sheet_names.first().cloned().ok_or_else(|| {
            PersistenceError::InvalidFormat("Workbook contains no sheets".to_string())
        })?,
    };

    workbook.load_merged_regions()?;
    let merges = workbook
        .merged_regions_by_sheet(&sheet_name)
        .into_iter()
        .map(|(_, _, dims)| merge_range(dims.start, dims.end))
        .collect::<Result<Vec<_>, _>>()?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let mut sheet = Sheet::new(sheet_name.as_str());
    for region in merges {
        sheet.merge_cells(region);
    }

    // used_cells() positions are relative to the range's first cell.
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    for (row_idx, col_idx, data) in range.used_cells() {
        let Some(value) = convert_data(data) else {
            continue;
        };
        let at = CellRef::new(
            start_row + row_idx as u32 + 1,
            start_col + col_idx as u32 + 1,
        )?;

        match sheet.set_value(at, value) {
            Ok(()) => {}
            Err(SheetError::PlaceholderWrite(_)) => {
                debug!(target: "persistence", "dropping value under merged cell {}", at);
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(
        target: "persistence",
        "loaded {:?}: {} cells, {} merge regions",
        sheet.name,
        sheet.len(),
        sheet.merged_regions().len()
    );
    Ok(sheet)
}

/// Converts calamine's 0-based (row, col) corners into a 1-based range.
fn merge_range(start: (u32, u32), end: (u32, u32)) -> Result<CellRange, SheetError> {
    CellRange::from_bounds(start.0 + 1, start.1 + 1, end.0 + 1, end.1 + 1)
}

fn convert_data(data: &Data) -> Option<CellValue> {
    let value = match data {
        Data::Empty => return None,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(convert_error(e)),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    };
    Some(value)
}

fn convert_error(e: &CellErrorType) -> CellError {
    match e {
        CellErrorType::Div0 => CellError::Div0,
        CellErrorType::NA => CellError::NA,
        CellErrorType::Name => CellError::Name,
        CellErrorType::Null => CellError::Null,
        CellErrorType::Num => CellError::Num,
        CellErrorType::Ref => CellError::Ref,
        _ => CellError::Value,
    }
}
