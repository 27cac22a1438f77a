//! Record Operations
//!
//! Pure add/search/update/delete logic over an in-memory record set.
//! Nothing here touches the filesystem; [`crate::gradebook::Gradebook`]
//! loads the set, calls into it, and persists the result.

use crate::error::{GradebookError, Result};
use crate::record::{Mark, NewStudent, StudentRecord};

/// The full collection of student records, in storage order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<StudentRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any record carries `id`
    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Append a new record
    ///
    /// Fails with `DuplicateId` and leaves the set unchanged if `id` is taken.
    pub fn add(&mut self, student: NewStudent) -> Result<&StudentRecord> {
        if self.contains(&student.id) {
            return Err(GradebookError::DuplicateId(student.id));
        }

        self.records.push(StudentRecord::new(student));
        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// First record matching `id`
    pub fn search(&self, id: &str) -> Result<&StudentRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| GradebookError::NotFound(id.to_string()))
    }

    /// Overwrite one subject's mark on the first record matching `id`
    ///
    /// Errors, checked in order: `NotFound`, `NoSubjects`, `UnknownSubject`.
    pub fn update_mark(&mut self, id: &str, subject: &str, mark: Mark) -> Result<&StudentRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| GradebookError::NotFound(id.to_string()))?;

        record.update_mark(subject, mark)?;
        Ok(&*record)
    }

    /// Remove every record matching `id`
    ///
    /// Filters by value rather than index. Returns the removed records.
    pub fn delete(&mut self, id: &str) -> Result<Vec<StudentRecord>> {
        let (removed, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.records).into_iter().partition(|r| r.id == id);
        self.records = kept;

        if removed.is_empty() {
            return Err(GradebookError::NotFound(id.to_string()));
        }
        Ok(removed)
    }

    /// All records in storage order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<StudentRecord>> for RecordSet {
    fn from(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }
}
