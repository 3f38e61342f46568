//! FILENAME: core/persistence/src/xlsx_writer.rs

use engine::{CellRef, CellValue, Sheet};
use log::info;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook as XlsxWorkbook};
use std::path::Path;

use crate::PersistenceError;

/// Writes `sheet` as the only worksheet of a new workbook at `path`.
pub fn save_xlsx(sheet: &Sheet, path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();
    if !sheet.name.is_empty() {
        worksheet.set_name(&sheet.name)?;
    }

    // Merges go first: merge_range writes a string into the top-left, which
    // the cell pass below then overwrites with the real value.
    let blank = Format::new();
    for region in sheet.merged_regions() {
        let (first_row, first_col) = position(region.top_left());
        let (last_row, last_col) = position(region.bottom_right());
        worksheet.merge_range(first_row, first_col, last_row, last_col, "", &blank)?;
    }

    for (at, cell) in sheet.cells_row_major() {
        let (row, col) = position(at);
        match &cell.value {
            CellValue::Empty => {}
            CellValue::Number(n) => {
                worksheet.write_number(row, col, *n)?;
            }
            CellValue::Text(s) => {
                worksheet.write_string(row, col, s)?;
            }
            CellValue::Boolean(b) => {
                worksheet.write_boolean(row, col, *b)?;
            }
            CellValue::Error(e) => {
                worksheet.write_string(row, col, e.literal())?;
            }
        }
    }

    xlsx.save(path)?;
    info!(
        target: "persistence",
        "saved {:?} to {}: {} cells, {} merge regions",
        sheet.name,
        path.display(),
        sheet.len(),
        sheet.merged_regions().len()
    );
    Ok(())
}

/// 1-based sheet coordinates to the writer's 0-based ones.
fn position(at: CellRef) -> (RowNum, ColNum) {
    (at.row() - 1, (at.col() - 1) as ColNum)
}
