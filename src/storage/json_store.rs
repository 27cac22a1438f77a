//! JSON File Store
//!
//! Reads and overwrites the record file as a whole.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{GradebookError, Result};
use crate::record::StudentRecord;

/// File-backed store for the record set
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Backing file
    path: PathBuf,

    /// Spaces per indentation level when saving
    indent: usize,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, indent: usize) -> Self {
        Self {
            path: path.into(),
            indent,
        }
    }

    /// Read the persisted record set
    ///
    /// Returns:
    /// - `Ok(vec![])` if the file does not exist
    /// - `Err(CorruptDataFile)` if it exists but is not a JSON array of records
    /// - `Err(Io)` for any other read failure
    pub fn load(&self) -> Result<Vec<StudentRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No data file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes).map_err(|source| GradebookError::CorruptDataFile {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the record set, downgrading any failure to an empty set
    ///
    /// The error, if any, is handed back so the caller can report it.
    pub fn load_or_empty(&self) -> (Vec<StudentRecord>, Option<GradebookError>) {
        match self.load() {
            Ok(records) => (records, None),
            Err(e) => {
                tracing::warn!("{}. Starting with no records.", e);
                (Vec::new(), Some(e))
            }
        }
    }

    /// Overwrite the backing file with the full record set
    pub fn save(&self, records: &[StudentRecord]) -> Result<()> {
        self.write_all(records)
            .map_err(|source| GradebookError::WriteFailure {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn write_all(&self, records: &[StudentRecord]) -> std::io::Result<()> {
        let buf = to_pretty_json(records, self.indent)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, buf)
    }
}

/// Pretty-print `value` as JSON with `indent` spaces per level
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> serde_json::Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    Ok(buf)
}
