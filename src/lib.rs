//! # Gradebook
//!
//! A single-user, file-backed record manager for student grades:
//! - Per-subject marks with derived total, percentage and letter grade
//! - Duplicate-ID prevention
//! - Whole-file JSON persistence, tolerant of a missing or corrupt file
//! - Line-oriented text menu front-end
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Menu Loop                             │
//! │                 (BufRead in / Write out)                     │
//! └─────────────────────┬──────────────────────┬────────────────┘
//!                       │                      │
//! ┌─────────────────────▼──────────────┐ ┌─────▼───────────────┐
//! │             Gradebook              │ │    Presentation     │
//! │    (load → apply → persist)        │ │  (Grid / Plain)     │
//! └──────────┬──────────────┬──────────┘ └─────────────────────┘
//!            │              │
//!            ▼              ▼
//!   ┌─────────────┐  ┌─────────────┐
//!   │  RecordSet  │  │   Storage   │
//!   │   (pure)    │  │   (JSON)    │
//!   └──────┬──────┘  └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │ Grade Policy│
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod grade;
pub mod record;
pub mod records;
pub mod storage;
pub mod gradebook;
pub mod presentation;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GradebookError, Result};
pub use config::{Config, TableStyle};
pub use grade::{grade_for, Grade};
pub use record::{Mark, NewStudent, StudentRecord, Subjects};
pub use records::RecordSet;
pub use gradebook::{Gradebook, Outcome};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Gradebook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
