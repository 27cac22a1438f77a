//! Presentation Module
//!
//! Turns records into text for the operator. Purely presentational: nothing
//! here changes stored data.
//!
//! ## Table Styles
//! ```text
//! Grid                         Plain
//! +----+------+                ID | Name
//! | ID | Name |                ---------
//! +====+======+                S1 | Ada
//! | S1 | Ada  |
//! +----+------+
//! ```

use crate::config::TableStyle;
use crate::error::Result;
use crate::record::StudentRecord;
use crate::storage::to_pretty_json;

/// Column headers for the student table
pub const STUDENT_HEADERS: [&str; 5] = ["ID", "Name", "Class", "Percent", "Grade"];

// =============================================================================
// Rows
// =============================================================================

/// One displayed line of the student table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub id: String,
    pub name: String,
    pub class: String,
    /// Two decimals and a percent sign, e.g. `"85.00%"`
    pub percent: String,
    pub grade: String,
}

impl From<&StudentRecord> for StudentRow {
    fn from(record: &StudentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            class: record.class.clone(),
            percent: format!("{:.2}%", record.percentage),
            grade: record.grade.to_string(),
        }
    }
}

impl StudentRow {
    fn into_cells(self) -> Vec<String> {
        vec![self.id, self.name, self.class, self.percent, self.grade]
    }
}

// =============================================================================
// Renderers
// =============================================================================

/// Table layout strategy
pub trait TableRenderer {
    fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> String;

    /// Shown once when a session starts with this renderer
    fn notice(&self) -> Option<&'static str> {
        None
    }
}

/// Startup notice for the fallback layout
pub const PLAIN_TABLE_NOTICE: &str =
    "WARNING: grid table formatting is off. Using the plain table layout (drop --plain for the grid).";

/// Bordered grid, one rule between every row
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRenderer;

/// Header, dash line, and `" | "`-joined rows
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl TableRenderer for GridRenderer {
    fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let widths = column_widths(headers, rows);
        let rule = |fill: char| -> String {
            let mut line = String::from("+");
            for w in &widths {
                line.extend(std::iter::repeat(fill).take(w + 2));
                line.push('+');
            }
            line
        };
        let line = |cells: &[&str]| -> String {
            let mut line = String::from("|");
            for (i, w) in widths.iter().enumerate() {
                let cell = cells.get(i).copied().unwrap_or("");
                line.push(' ');
                line.push_str(&pad(cell, *w));
                line.push_str(" |");
            }
            line
        };

        let mut out = vec![rule('-'), line(headers), rule('=')];
        for row in rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push(line(cells.as_slice()));
            out.push(rule('-'));
        }
        out.join("\n")
    }
}

impl TableRenderer for PlainRenderer {
    fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let header_line = headers.join(" | ");
        let separator = "-".repeat(header_line.chars().count());

        let mut out = vec![header_line, separator];
        out.extend(rows.iter().map(|row| row.join(" | ")));
        out.join("\n")
    }

    fn notice(&self) -> Option<&'static str> {
        Some(PLAIN_TABLE_NOTICE)
    }
}

/// Renderer for the configured style
pub fn renderer_for(style: TableStyle) -> Box<dyn TableRenderer> {
    match style {
        TableStyle::Grid => Box::new(GridRenderer),
        TableStyle::Plain => Box::new(PlainRenderer),
    }
}

// =============================================================================
// Views
// =============================================================================

/// The "View All" table
pub fn render_students(renderer: &dyn TableRenderer, records: &[StudentRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| StudentRow::from(r).into_cells())
        .collect();
    renderer.render(&STUDENT_HEADERS, &rows)
}

/// A single record as pretty JSON, for "Search"
pub fn render_record(record: &StudentRecord, indent: usize) -> Result<String> {
    let bytes = to_pretty_json(record, indent)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// =============================================================================
// Private Helpers
// =============================================================================

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}
