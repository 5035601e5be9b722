//! In-memory registries owning students and courses

pub mod courses;
pub mod students;

pub use courses::{CourseRegistry, CourseSummary, DEFAULT_CATALOG};
pub use students::{Registration, StudentRegistry, StudentSummary};
