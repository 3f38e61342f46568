//! FILENAME: tests/common/mod.rs
//! Fixtures for fill integration tests.

#![allow(dead_code)]

use detector::{detect_fields, DetectionResult, DetectorConfig};
use engine::{CellRef, Sheet};

pub fn at(s: &str) -> CellRef {
    s.parse().unwrap()
}

/// Builds a sheet from (coordinate, text) pairs plus merge ranges.
pub fn sheet(cells: &[(&str, &str)], merges: &[&str]) -> Sheet {
    let mut sheet = Sheet::new("Formulario");
    for (coord, text) in cells {
        sheet.set_value(at(coord), *text).unwrap();
    }
    for range in merges {
        sheet.merge_cells(range.parse().unwrap());
    }
    sheet
}

pub fn detect(sheet: &Sheet) -> DetectionResult {
    detect_fields(sheet, &DetectorConfig::default()).unwrap()
}

pub fn text_at<'a>(sheet: &'a Sheet, coord: &str) -> Option<&'a str> {
    sheet.text(at(coord))
}
