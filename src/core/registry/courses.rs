//! Course catalog

use crate::core::models::Course;
use std::collections::HashMap;

/// Catalog loaded by [`CourseRegistry::new`]: `(code, name, credits)`
pub const DEFAULT_CATALOG: &[(&str, &str, u8)] = &[
    ("INTRO-CS-1", "Introduction to Computer Science", 9),
    ("INTRO-CS-2", "Introduction to Algorithms", 9),
    (
        "INTRO-CS-3",
        "Algorithm Design and Problem Solving - Introductory",
        9,
    ),
    (
        "INTRO-CS-4",
        "Algorithm Design and Problem Solving - Advanced",
        9,
    ),
    ("INTRO-CS-5", "Discrete Mathematics", 9),
    ("INTRO-CS-6", "Fundamentals of Computing", 9),
    ("INTRO-CS-7", "Computer Architecture", 9),
    ("INTRO-BIO", "Basic Biology", 8),
    ("INTRO-PHYS", "Physics 101", 8),
];

/// Read-only view of one catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    /// Course code
    pub code: String,
    /// Display name
    pub name: String,
    /// Credit value
    pub credits: u8,
    /// Number of enrolled students
    pub roster_size: usize,
}

/// Owns every course, indexed by course code
#[derive(Debug, Clone)]
pub struct CourseRegistry {
    courses: HashMap<String, Course>,
}

impl Default for CourseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseRegistry {
    /// Registry pre-populated with [`DEFAULT_CATALOG`]
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (code, name, credits) in DEFAULT_CATALOG {
            registry.add_course(Course::new(
                (*code).to_string(),
                (*name).to_string(),
                *credits,
            ));
        }
        registry
    }

    /// Registry with no courses
    #[must_use]
    pub fn empty() -> Self {
        Self {
            courses: HashMap::new(),
        }
    }

    /// Add a course to the catalog
    ///
    /// # Returns
    /// `true` if the course was added, `false` if a course with the same code already exists
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.courses.contains_key(course.code()) {
            return false;
        }
        self.courses.insert(course.code().to_string(), course);
        true
    }

    /// Look up a course by code
    #[must_use]
    pub fn get_course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Add a student id to a course roster
    ///
    /// Adding an id already on the roster is a no-op.
    ///
    /// # Returns
    /// `None` if the course does not exist, otherwise whether the id was newly added
    pub fn enroll_student(&mut self, code: &str, student_id: &str) -> Option<bool> {
        self.courses
            .get_mut(code)
            .map(|course| course.add_student(student_id))
    }

    /// Number of courses in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All courses with their roster sizes, sorted by code
    #[must_use]
    pub fn summary(&self) -> Vec<CourseSummary> {
        let mut rows: Vec<CourseSummary> = self
            .courses
            .values()
            .map(|course| CourseSummary {
                code: course.code().to_string(),
                name: course.name.clone(),
                credits: course.credits,
                roster_size: course.roster_size(),
            })
            .collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        rows
    }
}
