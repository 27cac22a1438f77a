//! Gradebook Module
//!
//! Coordinates the record operations with the backing file.
//!
//! ## Responsibilities
//! - Load the full record set before every operation
//! - Apply one [`RecordSet`] operation
//! - Persist the full record set after every successful mutation
//! - Collect recoverable storage problems as warnings instead of failing

use std::path::Path;

use crate::config::Config;
use crate::error::{GradebookError, Result};
use crate::record::{Mark, NewStudent, StudentRecord};
use crate::records::RecordSet;
use crate::storage::JsonFileStore;

/// Result of one operation plus the storage warnings raised along the way
///
/// A warning never changes `result`: a corrupt file reads as an empty set,
/// and a failed save still reports the in-memory change as applied.
#[derive(Debug)]
pub struct Outcome<T> {
    /// What the operation itself produced
    pub result: Result<T>,

    /// `CorruptDataFile` from loading, `WriteFailure` from saving
    pub warnings: Vec<GradebookError>,
}

impl<T> Outcome<T> {
    /// Drop the warnings and keep the operation result
    pub fn into_result(self) -> Result<T> {
        self.result
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// The record manager
///
/// Holds no records between calls: every operation is a complete
/// read-modify-write against the data file.
pub struct Gradebook {
    /// Gradebook configuration
    config: Config,

    /// Backing file
    store: JsonFileStore,
}

impl Gradebook {
    /// Open a gradebook with the given config
    ///
    /// Nothing is read until the first operation; a missing data file is an
    /// empty gradebook.
    pub fn open(config: Config) -> Self {
        let store = JsonFileStore::new(&config.data_file, config.json_indent);
        Self { config, store }
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Self {
        Self::open(Config::builder().data_file(path).build())
    }

    /// Add a new student; rejects an existing id with `DuplicateId`
    pub fn add(&self, student: NewStudent) -> Outcome<StudentRecord> {
        let id = student.id.clone();
        let outcome = self.mutate(|set| set.add(student).cloned());
        if outcome.is_ok() {
            tracing::info!("Added student {}", id);
        }
        outcome
    }

    /// All records in storage order
    pub fn list(&self) -> Outcome<Vec<StudentRecord>> {
        self.read(|set| Ok(set.records().to_vec()))
    }

    /// First record matching `id`
    pub fn search(&self, id: &str) -> Outcome<StudentRecord> {
        self.read(|set| set.search(id).cloned())
    }

    /// True if a record with `id` exists
    pub fn contains(&self, id: &str) -> Outcome<bool> {
        self.read(|set| Ok(set.contains(id)))
    }

    /// Overwrite one subject's mark and recompute totals
    pub fn update_mark(&self, id: &str, subject: &str, mark: Mark) -> Outcome<StudentRecord> {
        let outcome = self.mutate(|set| set.update_mark(id, subject, mark).cloned());
        if let Ok(record) = &outcome.result {
            tracing::info!(
                "Updated {} for student {} to {} (grade {})",
                subject,
                id,
                mark,
                record.grade
            );
        }
        outcome
    }

    /// Remove the record(s) matching `id`
    pub fn delete(&self, id: &str) -> Outcome<Vec<StudentRecord>> {
        let outcome = self.mutate(|set| set.delete(id));
        if let Ok(removed) = &outcome.result {
            tracing::info!("Deleted {} record(s) for student {}", removed.len(), id);
        }
        outcome
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the data file path
    pub fn data_file(&self) -> &Path {
        self.store.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn load(&self) -> (RecordSet, Vec<GradebookError>) {
        let (records, warning) = self.store.load_or_empty();
        (RecordSet::from(records), warning.into_iter().collect())
    }

    /// Load, run a read-only operation, report
    fn read<T>(&self, op: impl FnOnce(&RecordSet) -> Result<T>) -> Outcome<T> {
        let (set, warnings) = self.load();
        Outcome {
            result: op(&set),
            warnings,
        }
    }

    /// Load, run a mutation, persist on success, report
    ///
    /// A failed operation leaves the file untouched. A failed save is
    /// reported once and not retried.
    fn mutate<T>(&self, op: impl FnOnce(&mut RecordSet) -> Result<T>) -> Outcome<T> {
        let (mut set, mut warnings) = self.load();
        let result = op(&mut set);

        if result.is_ok() {
            if let Err(e) = self.store.save(set.records()) {
                tracing::warn!("{}", e);
                warnings.push(e);
            }
        }

        Outcome { result, warnings }
    }
}
