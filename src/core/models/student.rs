//! Student model

use super::{CourseRef, Person};
use crate::core::error::{RegistrarError, Result};
use crate::core::grading::{is_passing, is_valid_grade};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something that can be evaluated on its recorded grades
pub trait Evaluation {
    /// Mean of all recorded grades, or `None` when nothing has been graded
    fn average_grade(&self) -> Option<f64>;

    /// Courses with a passing grade
    fn passed_courses(&self) -> Vec<&CourseRef>;
}

/// A student's enrollment in one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// The enrolled course
    pub course: CourseRef,
    /// Latest grade, if graded
    pub grade: Option<f64>,
}

/// Represents a registered student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    person: Person,

    /// Enrollments in the order they happened, at most one per course code
    enrollments: Vec<Enrollment>,
}

impl Student {
    /// Create a new student with no enrollments
    #[must_use]
    pub const fn new(person: Person) -> Self {
        Self {
            person,
            enrollments: Vec::new(),
        }
    }

    /// Identity record
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// Unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        self.person.id()
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// Enroll in a course
    ///
    /// Re-enrolling a course already present is a no-op.
    ///
    /// # Returns
    /// `true` if the course was added, `false` if the student was already enrolled
    pub fn enroll_to_course(&mut self, course: CourseRef) -> bool {
        if self.is_course_approved(&course.code) {
            return false;
        }
        self.enrollments.push(Enrollment {
            course,
            grade: None,
        });
        true
    }

    /// Whether the student is enrolled in (approved for) the course
    #[must_use]
    pub fn is_course_approved(&self, course_code: &str) -> bool {
        self.enrollment(course_code).is_some()
    }

    /// Record a grade, replacing any previous grade for the course
    ///
    /// # Errors
    /// `NotEnrolled` if the student is not enrolled in the course,
    /// `InvalidGrade` if the grade is outside `[0, 100]`
    pub fn grade_in_course(&mut self, course_code: &str, grade: f64) -> Result<()> {
        if !is_valid_grade(grade) {
            return Err(RegistrarError::InvalidGrade(grade));
        }
        let student_id = self.id().to_string();
        let enrollment = self
            .enrollments
            .iter_mut()
            .find(|e| e.course.code == course_code)
            .ok_or_else(|| RegistrarError::NotEnrolled {
                student_id,
                course_code: course_code.to_string(),
            })?;
        enrollment.grade = Some(grade);
        Ok(())
    }

    /// Latest grade for the course, if any
    #[must_use]
    pub fn grade_for_course(&self, course_code: &str) -> Option<f64> {
        self.enrollment(course_code).and_then(|e| e.grade)
    }

    /// Enrolled courses in enrollment order
    pub fn enrolled_courses(&self) -> impl Iterator<Item = &CourseRef> {
        self.enrollments.iter().map(|e| &e.course)
    }

    /// All enrollments in enrollment order
    #[must_use]
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Recorded grades as `(course code, grade)` pairs
    pub fn grades(&self) -> impl Iterator<Item = (&str, f64)> {
        self.enrollments
            .iter()
            .filter_map(|e| e.grade.map(|g| (e.course.code.as_str(), g)))
    }

    fn enrollment(&self, course_code: &str) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.course.code == course_code)
    }
}

impl Evaluation for Student {
    #[allow(clippy::cast_precision_loss)]
    fn average_grade(&self) -> Option<f64> {
        let (total, count) = self
            .grades()
            .fold((0.0, 0usize), |(total, count), (_, g)| (total + g, count + 1));
        (count > 0).then(|| total / count as f64)
    }

    fn passed_courses(&self) -> Vec<&CourseRef> {
        self.enrollments
            .iter()
            .filter(|e| e.grade.is_some_and(is_passing))
            .map(|e| &e.course)
            .collect()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student {{{}}}", self.person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn student() -> Student {
        Student::new(Person::new(
            "001".to_string(),
            "John Doe".to_string(),
            "johndoe@gmail.com".to_string(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        ))
    }

    fn course(code: &str) -> CourseRef {
        CourseRef {
            code: code.to_string(),
            name: format!("Course {code}"),
        }
    }

    #[test]
    fn test_new_student_has_nothing() {
        let s = student();
        assert_eq!(s.id(), "001");
        assert_eq!(s.name(), "John Doe");
        assert_eq!(s.enrolled_courses().count(), 0);
        assert!(s.average_grade().is_none());
        assert!(s.passed_courses().is_empty());
    }

    #[test]
    fn test_enroll_is_idempotent() {
        let mut s = student();

        assert!(s.enroll_to_course(course("INTRO-CS-1")));
        assert!(!s.enroll_to_course(course("INTRO-CS-1")));

        assert_eq!(s.enrolled_courses().count(), 1);
        assert!(s.is_course_approved("INTRO-CS-1"));
        assert!(!s.is_course_approved("INTRO-CS-2"));
    }

    #[test]
    fn test_enrollment_order_is_kept() {
        let mut s = student();
        s.enroll_to_course(course("INTRO-CS-3"));
        s.enroll_to_course(course("INTRO-BIO"));
        s.enroll_to_course(course("INTRO-CS-1"));

        let codes: Vec<&str> = s.enrolled_courses().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["INTRO-CS-3", "INTRO-BIO", "INTRO-CS-1"]);
    }

    #[test]
    fn test_regrade_replaces_previous() {
        let mut s = student();
        s.enroll_to_course(course("INTRO-CS-1"));

        s.grade_in_course("INTRO-CS-1", 45.0).unwrap();
        s.grade_in_course("INTRO-CS-1", 82.5).unwrap();

        assert_eq!(s.grade_for_course("INTRO-CS-1"), Some(82.5));
        assert_eq!(s.grades().count(), 1);
    }

    #[test]
    fn test_grade_requires_enrollment() {
        let mut s = student();

        let err = s.grade_in_course("INTRO-CS-1", 70.0).unwrap_err();
        assert_eq!(
            err,
            RegistrarError::NotEnrolled {
                student_id: "001".to_string(),
                course_code: "INTRO-CS-1".to_string(),
            }
        );
        assert!(s.grade_for_course("INTRO-CS-1").is_none());
    }

    #[test]
    fn test_grade_out_of_range_rejected() {
        let mut s = student();
        s.enroll_to_course(course("INTRO-CS-1"));

        assert_eq!(
            s.grade_in_course("INTRO-CS-1", 101.0),
            Err(RegistrarError::InvalidGrade(101.0))
        );
        assert!(s.grade_for_course("INTRO-CS-1").is_none());
    }

    #[test]
    fn test_average_grade() {
        let mut s = student();
        s.enroll_to_course(course("A"));
        s.enroll_to_course(course("B"));
        s.enroll_to_course(course("C"));
        s.grade_in_course("A", 60.0).unwrap();
        s.grade_in_course("B", 80.0).unwrap();

        let avg = s.average_grade().unwrap();
        assert!((avg - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_average_is_not_no_data() {
        let mut s = student();
        s.enroll_to_course(course("A"));
        s.grade_in_course("A", 0.0).unwrap();

        assert_eq!(s.average_grade(), Some(0.0));
    }

    #[test]
    fn test_passed_courses() {
        let mut s = student();
        s.enroll_to_course(course("A"));
        s.enroll_to_course(course("B"));
        s.enroll_to_course(course("C"));
        s.grade_in_course("A", 50.0).unwrap();
        s.grade_in_course("B", 49.9).unwrap();

        let passed: Vec<&str> = s.passed_courses().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(passed, vec!["A"]);
    }

    #[test]
    fn test_display() {
        assert!(student().to_string().starts_with("Student {id='001'"));
    }
}
