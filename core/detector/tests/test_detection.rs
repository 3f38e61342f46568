//! FILENAME: tests/test_detection.rs
//! Integration tests for the detection pass over whole sheets.

mod common;

use common::{at, sample_form, SheetBuilder};
use engine::Sheet;
use formfill_detector::{detect_fields, DetectionError, DetectionResult, DetectorConfig, FieldTarget};

fn detect(sheet: &Sheet) -> DetectionResult {
    detect_fields(sheet, &DetectorConfig::default()).unwrap()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_single_unmerged_label() {
    let sheet = SheetBuilder::new().text("A1", "Nombre:").build();
    let result = detect(&sheet);

    assert_eq!(result.len(), 1);
    let field = result.get("Nombre:").unwrap();
    assert_eq!(field.target, FieldTarget::Cell(at("B1")));
    assert!(!field.is_merged());
}

#[test]
fn test_merged_target() {
    let sheet = SheetBuilder::new()
        .text("A1", "Dirección:")
        .merge("B1:D1")
        .build();
    let result = detect(&sheet);

    let field = result.get("Dirección:").unwrap();
    assert_eq!(field.target.to_string(), "B1:D1");
    assert!(field.is_merged());
    assert_eq!(result.merge_map().get("B1:D1"), Some(at("B1")));
}

#[test]
fn test_occupied_target_is_never_chosen() {
    let sheet = SheetBuilder::new()
        .text("A1", "Email:")
        .text("B1", "x@y.com")
        .build();
    let result = detect(&sheet);

    // The occupied right-hand cell is passed over; the value itself is no label.
    let field = result.get("Email:").unwrap();
    assert_ne!(field.target.top_left(), at("B1"));
    assert_eq!(field.target, FieldTarget::Cell(at("A2")));
    assert!(result.get("x@y.com").is_none());
}

#[test]
fn test_value_text_is_not_a_label() {
    let sheet = SheetBuilder::new().text("A1", "123 Main St").build();
    assert!(detect(&sheet).is_empty());
}

#[test]
fn test_numbers_are_never_labels() {
    let sheet = SheetBuilder::new().number("A1", 42.0).build();
    assert!(detect(&sheet).is_empty());
}

#[test]
fn test_empty_sheet_is_empty_result() {
    let sheet = SheetBuilder::new().build();
    let result = detect(&sheet);
    assert!(result.is_empty());
    assert!(result.merge_map().is_empty());
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_detection_is_deterministic() {
    let sheet = sample_form();
    assert_eq!(detect(&sheet), detect(&sheet));
}

#[test]
fn test_sample_form_fields_in_scan_order() {
    let result = detect(&sample_form());

    let mapped: Vec<(String, String)> = result
        .fields()
        .iter()
        .map(|f| (f.label.clone(), f.target.to_string()))
        .collect();
    let expected = [
        ("Nombre:", "B2:D2"),
        ("Dirección:", "B3:D3"),
        ("Teléfono:", "B4"),
        ("Email:", "D4"),
        ("Fecha de nacimiento", "B5"),
        ("Cuenta CLABE:", "B7"),
    ];
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(l, t)| (l.to_string(), t.to_string()))
        .collect();
    assert_eq!(mapped, expected);
}

#[test]
fn test_targets_never_point_at_labels() {
    let result = detect(&sample_form());

    for field in result.fields() {
        for other in result.fields() {
            assert_ne!(field.target.top_left(), other.label_cell);
        }
    }
}

#[test]
fn test_target_top_lefts_are_unique() {
    let result = detect(&sample_form());
    let mut seen = std::collections::HashSet::new();
    for field in result.fields() {
        assert!(seen.insert(field.target.top_left()));
    }
}

#[test]
fn test_right_beats_below() {
    let sheet = SheetBuilder::new().text("B2", "Nombre:").build();
    let result = detect(&sheet);
    assert_eq!(result.get("Nombre:").unwrap().target, FieldTarget::Cell(at("C2")));
}

// ============================================================================
// DEDUPLICATION
// ============================================================================

#[test]
fn test_colon_label_supersedes_earlier_plain_label() {
    // "Nombre" (A1) claims B1 first; "Nombre:" (C1) can only reach B1.
    let sheet = SheetBuilder::new()
        .text("A1", "Nombre")
        .text("C1", "Nombre:")
        .text("D1", "x")
        .text("C2", "y")
        .build();
    let result = detect(&sheet);

    assert_eq!(result.len(), 1);
    assert_eq!(result.get("Nombre:").unwrap().target, FieldTarget::Cell(at("B1")));
    assert!(result.get("Nombre").is_none());
}

#[test]
fn test_colon_label_keeps_target_against_later_plain_label() {
    let sheet = SheetBuilder::new()
        .text("A1", "Nombre:")
        .text("C1", "Nombre")
        .text("D1", "x")
        .text("C2", "y")
        .build();
    let result = detect(&sheet);

    assert_eq!(result.len(), 1);
    assert_eq!(result.get("Nombre:").unwrap().target, FieldTarget::Cell(at("B1")));
}

#[test]
fn test_first_plain_label_wins_shared_target() {
    let sheet = SheetBuilder::new()
        .text("A1", "Nombre")
        .text("C1", "Apellido")
        .text("D1", "x")
        .text("C2", "y")
        .build();
    let result = detect(&sheet);

    assert_eq!(result.labels(), vec!["Nombre".to_string()]);
}

#[test]
fn test_duplicate_label_keeps_first_occurrence() {
    let sheet = SheetBuilder::new()
        .text("A1", "Nombre:")
        .text("A3", "Nombre:")
        .build();
    let result = detect(&sheet);

    assert_eq!(result.len(), 1);
    assert_eq!(result.get("Nombre:").unwrap().label_cell, at("A1"));
}

#[test]
fn test_repeated_colon_label_evicts_then_is_discarded() {
    // The second "Nombre:" (C3) can only reach B3, held by "Apellido".
    // It takes B3 away from "Apellido" and is then dropped as a repeat.
    let sheet = SheetBuilder::new()
        .text("A1", "Nombre:")
        .text("A3", "Apellido")
        .text("C3", "Nombre:")
        .text("D3", "x")
        .text("C4", "y")
        .build();
    let result = detect(&sheet);

    assert_eq!(result.labels(), vec!["Nombre:".to_string()]);
    assert_eq!(result.get("Nombre:").unwrap().label_cell, at("A1"));
    assert!(result.get("Apellido").is_none());
}

// ============================================================================
// CONFIGURATION AND STRUCTURAL FAILURES
// ============================================================================

#[test]
fn test_alternate_keywords() {
    let sheet = SheetBuilder::new()
        .text("A1", "Full name")
        .text("A3", "Nombre")
        .build();
    let config = DetectorConfig::default().with_keywords(["name"]);
    let result = detect_fields(&sheet, &config).unwrap();

    assert_eq!(result.labels(), vec!["Full name".to_string()]);
}

#[test]
fn test_overlapping_merges_abort_detection() {
    let sheet = SheetBuilder::new()
        .text("A1", "Nombre:")
        .merge("B1:C2")
        .merge("C2:D3")
        .build();
    let err = detect_fields(&sheet, &DetectorConfig::default()).unwrap_err();
    assert!(matches!(err, DetectionError::OverlappingMerges { .. }));
}
