//! FILENAME: tests/common/mod.rs
//! Sheet fixtures for detection integration tests.

#![allow(dead_code)]

use engine::{CellRange, CellRef, Sheet};

pub fn at(s: &str) -> CellRef {
    s.parse().unwrap()
}

pub fn range(s: &str) -> CellRange {
    s.parse().unwrap()
}

/// Builds a sheet cell by cell.
pub struct SheetBuilder {
    sheet: Sheet,
}

impl SheetBuilder {
    pub fn new() -> Self {
        SheetBuilder {
            sheet: Sheet::new("Formulario"),
        }
    }

    pub fn text(mut self, coord: &str, text: &str) -> Self {
        self.sheet.set_value(at(coord), text).unwrap();
        self
    }

    pub fn number(mut self, coord: &str, n: f64) -> Self {
        self.sheet.set_value(at(coord), n).unwrap();
        self
    }

    pub fn merge(mut self, coords: &str) -> Self {
        self.sheet.merge_cells(range(coords));
        self
    }

    pub fn build(self) -> Sheet {
        self.sheet
    }
}

/// A bank account application with a merged title, merged answer areas,
/// a prefilled answer and a long paragraph.
///
/// ```text
///      A                         B          C          D
///  1   SOLICITUD DE APERTURA (merged A1:D1)
///  2   Nombre:                   [merged B2:D2]
///  3   Dirección:                [merged B3:D3]
///  4   Teléfono:                            Email:
///  5   Fecha de nacimiento
///  6   Banco:                    BBVA
///  7   Cuenta CLABE:
///  8   Declaro que los datos...  nombre
/// ```
pub fn sample_form() -> Sheet {
    SheetBuilder::new()
        .text("A1", "SOLICITUD DE APERTURA DE CUENTA")
        .merge("A1:D1")
        .text("A2", "Nombre:")
        .merge("B2:D2")
        .text("A3", "Dirección:")
        .merge("B3:D3")
        .text("A4", "Teléfono:")
        .text("C4", "Email:")
        .text("A5", "Fecha de nacimiento")
        .text("A6", "Banco:")
        .text("B6", "BBVA")
        .text("A7", "Cuenta CLABE:")
        .text("A8", "Declaro que los datos anteriores son verdaderos")
        .text("B8", "nombre")
        .build()
}
