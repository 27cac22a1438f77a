//! Tests for JsonFileStore
//!
//! These tests verify:
//! - Missing file reads as an empty record set
//! - Corrupt and empty files surface CorruptDataFile
//! - save/load round-trip, including subject order
//! - Pretty-printed output with the configured indent
//! - Write failures surface WriteFailure
//! - Stored percentages and out-of-range marks survive a load/save cycle

use std::fs;
use std::path::PathBuf;

use gradebook::record::{Mark, NewStudent, StudentRecord};
use gradebook::storage::JsonFileStore;
use gradebook::GradebookError;
use proptest::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, PathBuf, JsonFileStore) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.json");
    let store = JsonFileStore::new(&path, 4);
    (temp_dir, path, store)
}

fn record(id: &str, subjects: &[(&str, i64)]) -> StudentRecord {
    StudentRecord::new(NewStudent {
        id: id.to_string(),
        name: format!("Name {}", id),
        class: "12-A".to_string(),
        subjects: subjects
            .iter()
            .map(|(s, m)| (*s, Mark::new(*m).unwrap()))
            .collect(),
    })
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file_is_empty() {
    let (_temp, path, store) = setup_temp_store();

    assert!(!path.exists());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_load_corrupt_file() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "{ not json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, GradebookError::CorruptDataFile { .. }));
}

#[test]
fn test_load_empty_file_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "").unwrap();

    assert!(matches!(store.load(), Err(GradebookError::CorruptDataFile { .. })));
}

#[test]
fn test_load_wrong_shape_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, r#"{"id": "S1"}"#).unwrap();

    assert!(matches!(store.load(), Err(GradebookError::CorruptDataFile { .. })));
}

#[test]
fn test_load_or_empty_reports_corruption() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "[1, 2").unwrap();

    let (records, warning) = store.load_or_empty();

    assert!(records.is_empty());
    assert!(matches!(warning, Some(GradebookError::CorruptDataFile { .. })));
}

#[test]
fn test_load_or_empty_missing_file_has_no_warning() {
    let (_temp, _path, store) = setup_temp_store();

    let (records, warning) = store.load_or_empty();

    assert!(records.is_empty());
    assert!(warning.is_none());
}

// =============================================================================
// Save Tests
// =============================================================================

#[test]
fn test_save_then_load_round_trip() {
    let (_temp, _path, store) = setup_temp_store();
    let records = vec![
        record("S1", &[("Zoology", 55), ("Art", 91), ("Math", 73)]),
        record("S2", &[]),
    ];

    store.save(&records).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, records);
    let order: Vec<&str> = loaded[0].subjects.iter().map(|(s, _)| s).collect();
    assert_eq!(order, vec!["Zoology", "Art", "Math"]);
}

#[test]
fn test_save_of_loaded_file_is_stable() {
    let (_temp, path, store) = setup_temp_store();
    store
        .save(&[record("S1", &[("Math", 67), ("Sci", 68)])])
        .unwrap();
    let first = fs::read_to_string(&path).unwrap();

    let loaded = store.load().unwrap();
    store.save(&loaded).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_non_terminating_percentage_round_trips_exactly() {
    let (_temp, path, store) = setup_temp_store();
    let original = record("S1", &[("Math", 90), ("Sci", 90), ("Art", 91)]);
    assert_eq!(original.percentage, 271.0 / 3.0);

    store.save(std::slice::from_ref(&original)).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    let loaded = store.load().unwrap();
    store.save(&loaded).unwrap();

    assert_eq!(loaded[0].percentage.to_bits(), original.percentage.to_bits());
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_load_keeps_stored_out_of_range_marks() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(
        &path,
        r#"[{"id": "S1", "name": "Ada", "class": "9-B", "subjects": {"Math": 105, "Sci": 70.0},
            "total": 175, "percentage": 87.5, "grade": "B"}]"#,
    )
    .unwrap();

    let loaded = store.load().unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].subjects.get("Math").unwrap().value(), 105);
    assert_eq!(loaded[0].subjects.get("Sci").unwrap().value(), 70);
    assert_eq!(loaded[0].total, 175);
}

#[test]
fn test_save_is_pretty_printed() {
    let (_temp, path, store) = setup_temp_store();

    store.save(&[record("S1", &[("Math", 80)])]).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.starts_with("[\n    {\n        \"id\": \"S1\""));
    assert!(text.contains("\"grade\": \"B\""));
}

#[test]
fn test_save_respects_indent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("two.json");
    let store = JsonFileStore::new(&path, 2);

    store.save(&[record("S1", &[])]).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.starts_with("[\n  {\n    \"id\""));
}

#[test]
fn test_save_overwrites_previous_contents() {
    let (_temp, _path, store) = setup_temp_store();

    store.save(&[record("S1", &[]), record("S2", &[])]).unwrap();
    store.save(&[record("S3", &[])]).unwrap();

    let ids: Vec<String> = store.load().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["S3".to_string()]);
}

#[test]
fn test_save_creates_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("students.json");
    let store = JsonFileStore::new(&path, 4);

    store.save(&[]).unwrap();

    assert!(path.exists());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_to_directory_is_write_failure() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path(), 4);

    let err = store.save(&[record("S1", &[])]).unwrap_err();

    match err {
        GradebookError::WriteFailure { path, .. } => assert_eq!(path, temp_dir.path()),
        other => panic!("expected WriteFailure, got {other:?}"),
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_save_load_preserves_records(
        marks in proptest::collection::vec(0i64..=100, 0..40)
    ) {
        let (_temp, _path, store) = setup_temp_store();
        let subjects: Vec<(String, i64)> = marks
            .iter()
            .enumerate()
            .map(|(i, m)| (format!("Subject{}", i), *m))
            .collect();
        let borrowed: Vec<(&str, i64)> =
            subjects.iter().map(|(s, m)| (s.as_str(), *m)).collect();
        let records = vec![record("S1", &borrowed)];

        store.save(&records).unwrap();
        let loaded = store.load().unwrap();

        prop_assert_eq!(loaded[0].percentage.to_bits(), records[0].percentage.to_bits());
        prop_assert_eq!(loaded, records);
    }
}
