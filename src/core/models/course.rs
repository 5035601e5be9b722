//! Course model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Represents a course in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, unique within the catalog (e.g., "INTRO-CS-1")
    code: String,

    /// Display name (e.g., "Introduction to Computer Science")
    pub name: String,

    /// Credit value
    pub credits: u8,

    /// Ids of the students currently enrolled
    roster: BTreeSet<String>,
}

impl Course {
    /// Create a new course with an empty roster
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `name` - Display name
    /// * `credits` - Credit value
    #[must_use]
    pub const fn new(code: String, name: String, credits: u8) -> Self {
        Self {
            code,
            name,
            credits,
            roster: BTreeSet::new(),
        }
    }

    /// Course code
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Add a student id to the roster
    ///
    /// # Returns
    /// `true` if the id was added, `false` if it was already on the roster
    pub fn add_student(&mut self, student_id: &str) -> bool {
        self.roster.insert(student_id.to_string())
    }

    /// Whether the given student id is on the roster
    #[must_use]
    pub fn has_student(&self, student_id: &str) -> bool {
        self.roster.contains(student_id)
    }

    /// Student ids on the roster, in ascending order
    pub fn roster(&self) -> impl Iterator<Item = &str> {
        self.roster.iter().map(String::as_str)
    }

    /// Number of enrolled students
    #[must_use]
    pub fn roster_size(&self) -> usize {
        self.roster.len()
    }

    /// Lightweight reference for holding outside the catalog
    #[must_use]
    pub fn to_ref(&self) -> CourseRef {
        CourseRef {
            code: self.code.clone(),
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course {{ code='{}', name='{}', credits={} }}",
            self.code, self.name, self.credits
        )
    }
}

/// A course as seen from a student's record: code and display name only.
///
/// The full `Course`, roster included, stays owned by the course registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseRef {
    /// Course code
    pub code: String,
    /// Display name
    pub name: String,
}

impl fmt::Display for CourseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
