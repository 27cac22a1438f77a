//! Student Record
//!
//! The unit stored in the record set. A record owns its subject marks and
//! the values derived from them (`total`, `percentage`, `grade`).

use std::fmt;

use serde::de::{self, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GradebookError, Result};
use crate::grade::{grade_for, Grade};

// =============================================================================
// Mark
// =============================================================================

/// A subject mark
///
/// Operator input is checked against `0..=100` by [`Mark::new`] and
/// [`Mark::parse`]. Marks read back from the data file are taken as written,
/// so a hand-edited out-of-range mark never makes the whole file unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "i64")]
pub struct Mark(i64);

impl Mark {
    pub const MAX: i64 = 100;

    /// Validate a numeric mark
    pub fn new(value: i64) -> Result<Self> {
        if (0..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GradebookError::InvalidMark(value.to_string()))
        }
    }

    /// Parse operator input such as `" 87 "`
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| GradebookError::InvalidMark(trimmed.to_string()))?;
        Self::new(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<Mark> for i64 {
    fn from(mark: Mark) -> Self {
        mark.0
    }
}

impl<'de> Deserialize<'de> for Mark {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarkVisitor;

        impl<'de> Visitor<'de> for MarkVisitor {
            type Value = Mark;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a whole-number mark")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Mark, E> {
                Ok(Mark(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Mark, E> {
                i64::try_from(v)
                    .map(Mark)
                    .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
            }

            // `85.0` written by other tools
            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Mark, E> {
                if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                    Ok(Mark(v as i64))
                } else {
                    Err(E::invalid_value(Unexpected::Float(v), &self))
                }
            }
        }

        deserializer.deserialize_i64(MarkVisitor)
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Subjects
// =============================================================================

/// Subject name -> mark, in insertion order
///
/// Behaves like a map: inserting a name that is already present replaces its
/// mark and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subjects {
    entries: Vec<(String, Mark)>,
}

impl Subjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a subject's mark
    ///
    /// Returns the previous mark if the subject was already present.
    pub fn insert(&mut self, subject: impl Into<String>, mark: Mark) -> Option<Mark> {
        let subject = subject.into();
        match self.entries.iter_mut().find(|(name, _)| *name == subject) {
            Some((_, existing)) => Some(std::mem::replace(existing, mark)),
            None => {
                self.entries.push((subject, mark));
                None
            }
        }
    }

    pub fn get(&self, subject: &str) -> Option<Mark> {
        self.entries
            .iter()
            .find(|(name, _)| name == subject)
            .map(|(_, mark)| *mark)
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.get(subject).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all marks
    pub fn total(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |sum, (_, m)| sum.saturating_add(m.value()))
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Mark)> {
        self.entries.iter().map(|(name, mark)| (name.as_str(), *mark))
    }
}

impl<S: Into<String>> FromIterator<(S, Mark)> for Subjects {
    fn from_iter<I: IntoIterator<Item = (S, Mark)>>(iter: I) -> Self {
        let mut subjects = Subjects::new();
        for (name, mark) in iter {
            subjects.insert(name, mark);
        }
        subjects
    }
}

impl Serialize for Subjects {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(name, mark)| (name, mark)))
    }
}

impl<'de> Deserialize<'de> for Subjects {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SubjectsVisitor;

        impl<'de> Visitor<'de> for SubjectsVisitor {
            type Value = Subjects;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of subject names to marks")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Subjects, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut subjects = Subjects::new();
                while let Some((name, mark)) = access.next_entry::<String, Mark>()? {
                    subjects.insert(name, mark);
                }
                Ok(subjects)
            }
        }

        deserializer.deserialize_map(SubjectsVisitor)
    }
}

// =============================================================================
// Student Record
// =============================================================================

/// Input for creating a record
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub class: String,
    pub subjects: Subjects,
}

/// A persisted student record
///
/// `total`, `percentage` and `grade` are derived from `subjects`; every
/// mutation goes through [`StudentRecord::recompute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub class: String,
    #[serde(default)]
    pub subjects: Subjects,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub grade: Grade,
}

impl StudentRecord {
    /// Build a record and derive its totals
    pub fn new(student: NewStudent) -> Self {
        let mut record = Self {
            id: student.id,
            name: student.name,
            class: student.class,
            subjects: student.subjects,
            total: 0,
            percentage: 0.0,
            grade: Grade::F,
        };
        record.recompute();
        record
    }

    /// Re-derive `total`, `percentage` and `grade` from `subjects`
    ///
    /// With no subjects the percentage is 0.0, which the grade policy maps to F.
    pub fn recompute(&mut self) {
        self.total = self.subjects.total();
        self.percentage = if self.subjects.is_empty() {
            0.0
        } else {
            self.total as f64 / self.subjects.len() as f64
        };
        self.grade = grade_for(self.percentage);
    }

    /// Overwrite one existing subject's mark and re-derive totals
    pub fn update_mark(&mut self, subject: &str, mark: Mark) -> Result<()> {
        if self.subjects.is_empty() {
            return Err(GradebookError::NoSubjects(self.id.clone()));
        }
        if !self.subjects.contains(subject) {
            return Err(GradebookError::UnknownSubject {
                id: self.id.clone(),
                subject: subject.to_string(),
            });
        }
        self.subjects.insert(subject, mark);
        self.recompute();
        Ok(())
    }
}
