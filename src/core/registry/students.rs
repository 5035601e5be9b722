//! Student registry

use crate::core::error::{RegistrarError, Result};
use crate::core::grading::GradeSource;
use crate::core::models::{CourseRef, Enrollment, Student};
use std::collections::HashMap;

/// Outcome of adding a student to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// A new entry was created
    Created,
    /// The id was taken; nothing changed
    AlreadyExists,
    /// The id was taken and its entry was replaced
    Replaced,
}

/// Read-only projection of one student for display
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary<'a> {
    /// The student
    pub student: &'a Student,
    /// Enrolled courses, each with its grade if graded
    pub enrollments: &'a [Enrollment],
}

/// Owns every registered student, indexed by id
///
/// Iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    students: Vec<Student>,
    index: HashMap<String, usize>,
}

impl StudentRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a student, refusing ids that are already taken
    pub fn register(&mut self, student: Student) -> Registration {
        if self.index.contains_key(student.id()) {
            return Registration::AlreadyExists;
        }
        self.insert_new(student);
        Registration::Created
    }

    /// Register a student, replacing any existing entry with the same id
    ///
    /// A replaced entry keeps its position in registration order.
    pub fn upsert(&mut self, student: Student) -> Registration {
        if let Some(&slot) = self.index.get(student.id()) {
            self.students[slot] = student;
            return Registration::Replaced;
        }
        self.insert_new(student);
        Registration::Created
    }

    fn insert_new(&mut self, student: Student) {
        self.index.insert(student.id().to_string(), self.students.len());
        self.students.push(student);
    }

    /// Look up a student by id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Student> {
        self.index.get(id).map(|&slot| &self.students[slot])
    }

    /// Look up a student by id for mutation
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.index.get(id).map(|&slot| &mut self.students[slot])
    }

    /// Whether a student with the id is registered
    #[must_use]
    pub fn is_registered(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Enroll a student in a course
    ///
    /// # Returns
    /// `None` if the student is unknown, otherwise whether the course was newly added
    pub fn enroll(&mut self, student_id: &str, course: CourseRef) -> Option<bool> {
        self.find_mut(student_id)
            .map(|student| student.enroll_to_course(course))
    }

    /// Draw a grade from `source` and record it for an enrolled course
    ///
    /// Nothing is drawn unless the student exists and is enrolled.
    ///
    /// # Errors
    /// `StudentNotFound` or `NotEnrolled`
    pub fn grade_auto(
        &mut self,
        student_id: &str,
        course_code: &str,
        source: &mut dyn GradeSource,
    ) -> Result<f64> {
        let student = self
            .find_mut(student_id)
            .ok_or_else(|| RegistrarError::StudentNotFound(student_id.to_string()))?;
        if !student.is_course_approved(course_code) {
            return Err(RegistrarError::NotEnrolled {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            });
        }
        let grade = source.next_grade();
        student.grade_in_course(course_code, grade)?;
        Ok(grade)
    }

    /// Mean of the recorded grades for a course across all students
    ///
    /// Only students with a grade for exactly this code contribute.
    ///
    /// # Returns
    /// `None` when no student has a grade for the course
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn course_average(&self, course_code: &str) -> Option<f64> {
        let (total, count) = self
            .students
            .iter()
            .filter_map(|s| s.grade_for_course(course_code))
            .fold((0.0, 0usize), |(total, count), g| (total + g, count + 1));
        (count > 0).then(|| total / count as f64)
    }

    /// All students in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Number of registered students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether no students are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Every student with their enrollments and grades
    #[must_use]
    pub fn summary(&self) -> Vec<StudentSummary<'_>> {
        self.students
            .iter()
            .map(|student| StudentSummary {
                student,
                enrollments: student.enrollments(),
            })
            .collect()
    }
}
