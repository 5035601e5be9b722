//! Data models for `StudentGen`

pub mod course;
pub mod person;
pub mod student;

pub use course::{Course, CourseRef};
pub use person::Person;
pub use student::{Enrollment, Evaluation, Student};
