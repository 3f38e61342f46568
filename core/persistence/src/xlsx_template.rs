//! FILENAME: core/persistence/src/xlsx_template.rs
//! PURPOSE: Writes filled cells into a copy of the workbook they came from.
//! CONTEXT: Only the listed cells are touched. Other worksheets, styles,
//! column widths, row heights and merges come through unchanged.

use engine::{CellRef, CellValue, Sheet};
use log::{debug, info};
use std::path::Path;

use crate::PersistenceError;

/// Copies `template` to `output`, replacing the listed cells of the
/// worksheet named `sheet.name` with their values from `sheet`.
///
/// `template` and `output` may be the same path.
pub fn write_into_template(
    template: &Path,
    sheet: &Sheet,
    cells: &[CellRef],
    output: &Path,
) -> Result<(), PersistenceError> {
    let mut book = umya_spreadsheet::reader::xlsx::read(template)
        .map_err(|e| PersistenceError::Template(format!("{}: {}", template.display(), e)))?;

    let worksheet = book
        .get_sheet_by_name_mut(&sheet.name)
        .ok_or_else(|| PersistenceError::SheetNotFound(sheet.name.clone()))?;

    let mut written = 0;
    for at in cells {
        let Some(value) = sheet.value(*at) else {
            debug!(target: "persistence", "{} has no value, left as in template", at);
            continue;
        };
        let cell = worksheet.get_cell_mut(at.to_string().as_str());
        match value {
            CellValue::Empty => continue,
            CellValue::Text(s) => {
                cell.set_value_string(s.as_str());
            }
            CellValue::Number(n) => {
                cell.set_value_number(*n);
            }
            CellValue::Boolean(b) => {
                cell.set_value_bool(*b);
            }
            CellValue::Error(e) => {
                cell.set_value_string(e.literal());
            }
        }
        written += 1;
    }

    umya_spreadsheet::writer::xlsx::write(&book, output)
        .map_err(|e| PersistenceError::Template(format!("{}: {}", output.display(), e)))?;

    info!(
        target: "persistence",
        "wrote {} cells of {:?} into {}",
        written,
        sheet.name,
        output.display()
    );
    Ok(())
}
