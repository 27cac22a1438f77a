//! Storage Module
//!
//! Persists the whole record set as one pretty-printed JSON array.
//!
//! ## Responsibilities
//! - Read the full record set before every operation
//! - Overwrite the full record set after every mutation
//! - Treat an absent file as an empty record set
//! - Surface a corrupt file as a warning, never as a fatal error
//!
//! ## File Format
//! ```text
//! [
//!     {
//!         "id": "S1",
//!         "name": "Ada",
//!         "class": "10-B",
//!         "subjects": { "Math": 50, "Sci": 70 },
//!         "total": 120,
//!         "percentage": 60.0,
//!         "grade": "D"
//!     },
//!     ...
//! ]
//! ```
//!
//! There is no locking and no atomic replace: exactly one process is
//! expected to touch the file at a time.

mod json_store;

pub use json_store::{to_pretty_json, JsonFileStore};
