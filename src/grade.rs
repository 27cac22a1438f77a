//! Grade Policy
//!
//! Maps a percentage to a letter grade using fixed, inclusive lower bounds:
//!
//! ```text
//! percentage >= 90  ->  A
//! percentage >= 80  ->  B
//! percentage >= 70  ->  C
//! percentage >= 60  ->  D
//! otherwise         ->  F
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Letter grade
///
/// Ordered by desirability, so `Grade::F < Grade::A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Grade {
    #[default]
    F,
    D,
    C,
    B,
    A,
}

/// Thresholds, highest first
const THRESHOLDS: [(f64, Grade); 4] = [
    (90.0, Grade::A),
    (80.0, Grade::B),
    (70.0, Grade::C),
    (60.0, Grade::D),
];

/// Grade for a percentage
///
/// Total over every `f64`: NaN compares false against all thresholds and
/// falls through to `F`.
pub fn grade_for(percentage: f64) -> Grade {
    THRESHOLDS
        .iter()
        .find(|(min, _)| percentage >= *min)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

impl Grade {
    /// The grade's letter
    pub fn letter(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
