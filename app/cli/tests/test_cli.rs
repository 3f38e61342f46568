//! FILENAME: tests/test_cli.rs
//! End-to-end runs of the formfill binary.

mod common;

use common::{
    application_form, at, formfill, write_form, write_form_with_instructions, write_json,
};
use engine::Sheet;
use predicates::prelude::*;

#[test]
fn test_detect_lists_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_form(dir.path(), "solicitud.xlsx", &application_form());

    formfill()
        .arg("detect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 fields"))
        .stdout(predicate::str::contains("B2:D2"))
        .stdout(predicate::str::contains("Email:"));
}

#[test]
fn test_detect_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_form(dir.path(), "solicitud.xlsx", &application_form());

    let output = formfill()
        .args(["detect", "--json"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let fields: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        fields,
        serde_json::json!([
            {"label": "Nombre:", "label_cell": "A2", "target": "B2:D2"},
            {"label": "Teléfono:", "label_cell": "A3", "target": "B3"},
            {"label": "Email:", "label_cell": "C3", "target": "D3"},
        ])
    );
}

#[test]
fn test_detect_with_config_override() {
    let dir = tempfile::tempdir().unwrap();
    let mut sheet = Sheet::new("Form");
    sheet.set_value(at("A1"), "Zip code").unwrap();
    let input = write_form(dir.path(), "form.xlsx", &sheet);
    let config = write_json(dir.path(), "config.json", r#"{"keywords": ["zip"]}"#);

    formfill()
        .arg("detect")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Zip code"));
}

#[test]
fn test_fill_writes_default_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_form(dir.path(), "solicitud.xlsx", &application_form());
    let data = write_json(
        dir.path(),
        "valores.json",
        r#"{"Nombre:": "Juan Pérez", "Teléfono:": "55 1234 5678", "Email:": "juan@correo.mx"}"#,
    );

    formfill()
        .arg("fill")
        .arg(&input)
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Filled 3 fields, skipped 0"));

    let filled = persistence::load_xlsx(&dir.path().join("solicitud_output.xlsx")).unwrap();
    assert_eq!(filled.text(at("B2")), Some("Juan Pérez"));
    assert_eq!(filled.get_cell(at("C2")), None);
    assert_eq!(filled.text(at("B3")), Some("55 1234 5678"));
    assert_eq!(filled.text(at("D3")), Some("juan@correo.mx"));
}

#[test]
fn test_fill_keeps_the_rest_of_the_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_form_with_instructions(dir.path(), "solicitud.xlsx");
    let data = write_json(
        dir.path(),
        "valores.json",
        r#"{"Nombre:": "Juan Pérez", "Teléfono:": "55 1234 5678", "Email:": "juan@correo.mx"}"#,
    );
    let output = dir.path().join("lista.xlsx");

    formfill()
        .arg("fill")
        .arg(&input)
        .arg("--data")
        .arg(&data)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Filled 3 fields, skipped 0"));

    let notes = persistence::load_xlsx_sheet(&output, "Instrucciones").unwrap();
    assert_eq!(notes.text(at("A1")), Some("Use letra de molde"));

    let filled = persistence::load_xlsx_sheet(&output, "Solicitud").unwrap();
    assert_eq!(filled.text(at("A1")), Some("Solicitud de crédito"));
    assert_eq!(filled.text(at("B2")), Some("Juan Pérez"));
    assert_eq!(filled.text(at("D3")), Some("juan@correo.mx"));
    assert_eq!(filled.merged_regions().len(), 2);
}

#[test]
fn test_fill_reports_missing_values() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_form(dir.path(), "solicitud.xlsx", &application_form());
    let data = write_json(dir.path(), "valores.json", "```json\n{\"Nombre:\": \"Ana\"}\n```");
    let output = dir.path().join("salida.xlsx");

    formfill()
        .arg("fill")
        .arg(&input)
        .arg("--data")
        .arg(&data)
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Filled 1 fields, skipped 2"))
        .stderr(predicate::str::contains("'Teléfono:' not found in data"));

    let filled = persistence::load_xlsx(&output).unwrap();
    assert_eq!(filled.text(at("B2")), Some("Ana"));
}

#[test]
fn test_fill_rejects_bad_values_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_form(dir.path(), "solicitud.xlsx", &application_form());
    let data = write_json(dir.path(), "valores.json", r#"["Nombre:", "Ana"]"#);

    formfill()
        .arg("fill")
        .arg(&input)
        .arg("--data")
        .arg(&data)
        .assert()
        .code(2);

    assert!(!dir.path().join("solicitud_output.xlsx").exists());
}

#[test]
fn test_fill_without_fields_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut sheet = Sheet::new("Notas");
    sheet.set_value(at("A1"), "Juan Pérez").unwrap();
    let input = write_form(dir.path(), "notas.xlsx", &sheet);
    let data = write_json(dir.path(), "valores.json", "{}");

    formfill()
        .arg("fill")
        .arg(&input)
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("No form fields detected"));

    assert!(!dir.path().join("notas_output.xlsx").exists());
}

#[test]
fn test_missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();

    formfill()
        .arg("detect")
        .arg(dir.path().join("nope.xlsx"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("loading"));
}

#[test]
fn test_log_file_receives_unified_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_form(dir.path(), "solicitud.xlsx", &application_form());
    let log = dir.path().join("formfill.log");

    formfill()
        .args(["-vv", "detect"])
        .arg(&input)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.starts_with("# formfill session"));
    assert!(contents.lines().any(|l| l.contains("|DEBUG|detector|")));
}
