//! FILENAME: tests/common/mod.rs
//! Workbook fixtures written to a temp dir for the CLI tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use engine::{CellRef, Sheet};

pub fn at(s: &str) -> CellRef {
    s.parse().unwrap()
}

pub fn formfill() -> Command {
    let mut cmd = Command::cargo_bin("formfill").unwrap();
    cmd.env_remove("FORMFILL_LOG");
    cmd
}

/// A small application form: title merge, a merged name field, a plain
/// phone field and an email field to the right of it.
pub fn application_form() -> Sheet {
    let mut sheet = Sheet::new("Solicitud");
    sheet.set_value(at("A1"), "Solicitud de crédito").unwrap();
    sheet.merge_cells("A1:D1".parse().unwrap());
    sheet.set_value(at("A2"), "Nombre:").unwrap();
    sheet.merge_cells("B2:D2".parse().unwrap());
    sheet.set_value(at("A3"), "Teléfono:").unwrap();
    sheet.set_value(at("C3"), "Email:").unwrap();
    sheet
}

pub fn write_form(dir: &Path, name: &str, sheet: &Sheet) -> PathBuf {
    let path = dir.join(name);
    persistence::save_xlsx(sheet, &path).unwrap();
    path
}

pub fn write_json(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

/// `application_form` laid out by hand on a first worksheet, with a bold
/// title and a wide label column, followed by an "Instrucciones" sheet.
pub fn write_form_with_instructions(dir: &Path, name: &str) -> PathBuf {
    use rust_xlsxwriter::{Format, Workbook};

    let path = dir.join(name);
    let mut workbook = Workbook::new();

    let form = workbook.add_worksheet();
    form.set_name("Solicitud").unwrap();
    let bold = Format::new().set_bold();
    form.merge_range(0, 0, 0, 3, "Solicitud de crédito", &bold).unwrap();
    form.write_string(1, 0, "Nombre:").unwrap();
    form.merge_range(1, 1, 1, 3, "", &Format::new()).unwrap();
    form.write_string(2, 0, "Teléfono:").unwrap();
    form.write_string(2, 2, "Email:").unwrap();
    form.set_column_width(0, 24.0).unwrap();

    let notes = workbook.add_worksheet();
    notes.set_name("Instrucciones").unwrap();
    notes.write_string(0, 0, "Use letra de molde").unwrap();

    workbook.save(&path).unwrap();
    path
}
