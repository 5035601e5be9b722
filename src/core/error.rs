//! Error types for registry and grading operations

use thiserror::Error;

/// Failures raised by enrollment, grading and registration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistrarError {
    /// No student is registered under the id
    #[error("Student with ID '{0}' not found")]
    StudentNotFound(String),

    /// No course in the catalog has the code
    #[error("Course '{0}' not found")]
    CourseNotFound(String),

    /// A student with the id is already registered
    #[error("Student ID '{0}' already exists")]
    AlreadyExists(String),

    /// Grading was attempted for a course the student is not enrolled in
    #[error("Student '{student_id}' is not enrolled in course '{course_code}'")]
    NotEnrolled {
        /// Student id
        student_id: String,
        /// Course code
        course_code: String,
    },

    /// Grade outside the accepted range
    #[error("Grade {0} is outside the range 0-100")]
    InvalidGrade(f64),
}

/// Result alias used across the core
pub type Result<T> = std::result::Result<T, RegistrarError>;
