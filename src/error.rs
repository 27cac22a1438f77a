//! Error types for Gradebook
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using GradebookError
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Unified error type for Gradebook operations
#[derive(Debug, Error)]
pub enum GradebookError {
    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Student ID already exists: {0}")]
    DuplicateId(String),

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("No subjects found for student {0}")]
    NoSubjects(String),

    #[error("Subject '{subject}' not found for student {id}")]
    UnknownSubject { id: String, subject: String },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid mark '{0}': marks must be a whole number between 0 and 100")]
    InvalidMark(String),

    #[error("Invalid number of subjects: '{0}'")]
    InvalidSubjectCount(String),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Data file '{}' is empty or invalid: {source}", .path.display())]
    CorruptDataFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not save data to file '{}': {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
