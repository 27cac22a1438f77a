//! Tests for Presentation
//!
//! These tests verify:
//! - Row formatting (two-decimal percent, grade letter)
//! - Grid and plain table layouts
//! - Renderer selection from TableStyle
//! - JSON detail view

use gradebook::config::TableStyle;
use gradebook::presentation::{
    render_record, render_students, renderer_for, GridRenderer, PlainRenderer, StudentRow,
    TableRenderer,
};
use gradebook::record::{Mark, NewStudent, StudentRecord};

// =============================================================================
// Helper Functions
// =============================================================================

fn record(id: &str, name: &str, subjects: &[(&str, i64)]) -> StudentRecord {
    StudentRecord::new(NewStudent {
        id: id.to_string(),
        name: name.to_string(),
        class: "10".to_string(),
        subjects: subjects
            .iter()
            .map(|(s, m)| (*s, Mark::new(*m).unwrap()))
            .collect(),
    })
}

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// =============================================================================
// Row Tests
// =============================================================================

#[test]
fn test_row_formats_percent_with_two_decimals() {
    let row = StudentRow::from(&record("S1", "Ada", &[("A", 50), ("B", 70), ("C", 70)]));

    assert_eq!(row.id, "S1");
    assert_eq!(row.name, "Ada");
    assert_eq!(row.class, "10");
    assert_eq!(row.percent, "63.33%");
    assert_eq!(row.grade, "D");
}

#[test]
fn test_row_for_record_without_subjects() {
    let row = StudentRow::from(&record("S0", "Zed", &[]));

    assert_eq!(row.percent, "0.00%");
    assert_eq!(row.grade, "F");
}

// =============================================================================
// Renderer Tests
// =============================================================================

#[test]
fn test_plain_layout() {
    let out = PlainRenderer.render(&["ID", "Name"], &[cells(&["S1", "Ada"]), cells(&["S22", "Bo"])]);

    let expected = "ID | Name\n---------\nS1 | Ada\nS22 | Bo";
    assert_eq!(out, expected);
}

#[test]
fn test_grid_layout() {
    let out = GridRenderer.render(&["ID", "Name"], &[cells(&["S1", "Ada"]), cells(&["S22", "Bo"])]);

    let expected = [
        "+-----+------+",
        "| ID  | Name |",
        "+=====+======+",
        "| S1  | Ada  |",
        "+-----+------+",
        "| S22 | Bo   |",
        "+-----+------+",
    ]
    .join("\n");
    assert_eq!(out, expected);
}

#[test]
fn test_grid_pads_to_widest_cell_by_chars() {
    let out = GridRenderer.render(&["N"], &[cells(&["Zoë"])]);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "| N   |");
    assert_eq!(lines[3], "| Zoë |");
}

#[test]
fn test_renderer_for_style() {
    let headers = ["A", "B"];
    let rows = vec![cells(&["1", "2"])];

    let grid = renderer_for(TableStyle::Grid).render(&headers, &rows);
    let plain = renderer_for(TableStyle::Plain).render(&headers, &rows);

    assert!(grid.starts_with('+'));
    assert_eq!(plain, "A | B\n-----\n1 | 2");
}

// =============================================================================
// View Tests
// =============================================================================

#[test]
fn test_render_students_headers_and_rows() {
    let records = vec![
        record("S1", "Ada", &[("Math", 95)]),
        record("S2", "Bo", &[("Math", 61)]),
    ];

    let out = render_students(&PlainRenderer, &records);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "ID | Name | Class | Percent | Grade");
    assert_eq!(lines[2], "S1 | Ada | 10 | 95.00% | A");
    assert_eq!(lines[3], "S2 | Bo | 10 | 61.00% | D");
}

#[test]
fn test_render_record_as_json() {
    let text = render_record(&record("S1", "Ada", &[("Math", 80)]), 4).unwrap();

    assert!(text.starts_with("{\n    \"id\": \"S1\""));
    let parsed: StudentRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.name, "Ada");
}
