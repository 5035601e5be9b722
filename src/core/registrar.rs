//! Registrar: the entry point the presentation layer talks to
//!
//! A `Registrar` owns the student registry, the course catalog and the grade
//! source. It is constructed explicitly by the caller and passed around; there
//! is no process-wide instance.

use crate::core::error::{RegistrarError, Result};
use crate::core::grading::{is_passing, GradeSource, RandomGradeSource};
use crate::core::models::{Course, CourseRef, Evaluation, Person, Student};
use crate::core::registry::{
    CourseRegistry, CourseSummary, Registration, StudentRegistry, StudentSummary,
};
use crate::{debug, info};
use chrono::NaiveDate;
use std::fmt;

/// Outcome of grading a student in a course
#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    /// Graded student
    pub student_id: String,
    /// Graded course
    pub course: CourseRef,
    /// Recorded grade
    pub grade: f64,
    /// Whether the grade passes
    pub passed: bool,
}

/// Students pre-registered by [`Registrar::seed_demo_students`]: `(id, name, email, (year, month, day))`
const DEMO_STUDENTS: &[(&str, &str, &str, (i32, u32, u32))] = &[
    ("001", "John Doe", "johndoe@gmail.com", (2000, 1, 1)),
    ("002", "May Fair", "mayfair@gmail.com", (2010, 2, 2)),
    ("003", "Steve Smith", "stevesmith@gmail.com", (2015, 3, 3)),
];

/// Coordinates students, courses and grading
pub struct Registrar {
    students: StudentRegistry,
    courses: CourseRegistry,
    grades: Box<dyn GradeSource>,
}

impl fmt::Debug for Registrar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registrar")
            .field("students", &self.students)
            .field("courses", &self.courses)
            .finish_non_exhaustive()
    }
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new(
            CourseRegistry::new(),
            Box::new(RandomGradeSource::from_entropy()),
        )
    }
}

impl Registrar {
    /// Create a registrar with no students
    ///
    /// # Arguments
    /// * `courses` - Course catalog
    /// * `grades` - Source used by [`grade_student`](Self::grade_student)
    #[must_use]
    pub fn new(courses: CourseRegistry, grades: Box<dyn GradeSource>) -> Self {
        Self {
            students: StudentRegistry::new(),
            courses,
            grades,
        }
    }

    /// Default catalog with a seeded grade source
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            CourseRegistry::new(),
            Box::new(RandomGradeSource::seeded(seed)),
        )
    }

    /// Register the three demo students
    ///
    /// Ids already taken are left untouched.
    pub fn seed_demo_students(&mut self) {
        for (id, name, email, (year, month, day)) in DEMO_STUDENTS {
            let Some(birth_date) = NaiveDate::from_ymd_opt(*year, *month, *day) else {
                continue;
            };
            let person = Person::new(
                (*id).to_string(),
                (*name).to_string(),
                (*email).to_string(),
                birth_date,
            );
            if self.students.register(Student::new(person)) == Registration::Created {
                debug!("Seeded demo student {id}");
            }
        }
    }

    /// Register a new student
    ///
    /// # Errors
    /// `AlreadyExists` if a student with the same id is registered
    pub fn register_student(&mut self, person: Person) -> Result<&Student> {
        let id = person.id().to_string();
        match self.students.register(Student::new(person)) {
            Registration::Created => {
                info!("Registered student {id}");
                self.students
                    .find(&id)
                    .ok_or(RegistrarError::StudentNotFound(id))
            }
            // register never replaces, so anything else means the id is taken
            _ => Err(RegistrarError::AlreadyExists(id)),
        }
    }

    /// Look up a student by id
    #[must_use]
    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.find(id)
    }

    /// Whether a student with the id is registered
    #[must_use]
    pub fn is_registered(&self, id: &str) -> bool {
        self.students.is_registered(id)
    }

    /// Look up a course by code
    #[must_use]
    pub fn find_course(&self, code: &str) -> Option<CourseRef> {
        self.courses.get_course(code).map(Course::to_ref)
    }

    /// Enroll a student in a course, updating both the roster and the student
    ///
    /// # Returns
    /// `true` if newly enrolled, `false` if the student was already enrolled
    ///
    /// # Errors
    /// `StudentNotFound` or `CourseNotFound`
    pub fn enroll_student(&mut self, student_id: &str, course_code: &str) -> Result<bool> {
        if !self.students.is_registered(student_id) {
            return Err(RegistrarError::StudentNotFound(student_id.to_string()));
        }
        let course = self
            .find_course(course_code)
            .ok_or_else(|| RegistrarError::CourseNotFound(course_code.to_string()))?;

        let added_to_roster = self
            .courses
            .enroll_student(course_code, student_id)
            .unwrap_or(false);
        let added_to_student = self
            .students
            .enroll(student_id, course)
            .unwrap_or(false);

        let newly_enrolled = added_to_roster || added_to_student;
        if newly_enrolled {
            info!("Enrolled student {student_id} in {course_code}");
        } else {
            debug!("Student {student_id} already enrolled in {course_code}");
        }
        Ok(newly_enrolled)
    }

    /// Grade a student in a course with a generated grade
    ///
    /// The grade source is only consulted once the student, course and
    /// enrollment have been checked.
    ///
    /// # Errors
    /// `StudentNotFound`, `CourseNotFound` or `NotEnrolled`
    pub fn grade_student(&mut self, student_id: &str, course_code: &str) -> Result<GradeReport> {
        if !self.students.is_registered(student_id) {
            return Err(RegistrarError::StudentNotFound(student_id.to_string()));
        }
        let course = self
            .find_course(course_code)
            .ok_or_else(|| RegistrarError::CourseNotFound(course_code.to_string()))?;
        let grade = self
            .students
            .grade_auto(student_id, course_code, self.grades.as_mut())?;

        debug!("Generated grade for student {student_id} in {course_code}: {grade:.2}");
        Ok(GradeReport {
            student_id: student_id.to_string(),
            course,
            grade,
            passed: is_passing(grade),
        })
    }

    /// Grade a student in a course with a given grade
    ///
    /// # Errors
    /// `StudentNotFound`, `CourseNotFound`, `NotEnrolled` or `InvalidGrade`
    pub fn record_grade(
        &mut self,
        student_id: &str,
        course_code: &str,
        grade: f64,
    ) -> Result<GradeReport> {
        if !self.students.is_registered(student_id) {
            return Err(RegistrarError::StudentNotFound(student_id.to_string()));
        }
        let course = self
            .find_course(course_code)
            .ok_or_else(|| RegistrarError::CourseNotFound(course_code.to_string()))?;
        let student = self
            .students
            .find_mut(student_id)
            .ok_or_else(|| RegistrarError::StudentNotFound(student_id.to_string()))?;
        student.grade_in_course(course_code, grade)?;

        debug!("Graded student {student_id} in {course_code}: {grade:.2}");
        Ok(GradeReport {
            student_id: student_id.to_string(),
            course,
            grade,
            passed: is_passing(grade),
        })
    }

    /// Average grade in a course across all graded students
    ///
    /// # Returns
    /// `Ok(None)` when no student has been graded in the course
    ///
    /// # Errors
    /// `CourseNotFound`
    pub fn course_average(&self, course_code: &str) -> Result<Option<f64>> {
        if self.courses.get_course(course_code).is_none() {
            return Err(RegistrarError::CourseNotFound(course_code.to_string()));
        }
        Ok(self.students.course_average(course_code))
    }

    /// Average over all of a student's grades
    ///
    /// # Returns
    /// `Ok(None)` when the student has no grades
    ///
    /// # Errors
    /// `StudentNotFound`
    pub fn student_average(&self, student_id: &str) -> Result<Option<f64>> {
        self.students
            .find(student_id)
            .map(Student::average_grade)
            .ok_or_else(|| RegistrarError::StudentNotFound(student_id.to_string()))
    }

    /// Courses a student has passed
    ///
    /// # Errors
    /// `StudentNotFound`
    pub fn passed_courses(&self, student_id: &str) -> Result<Vec<CourseRef>> {
        self.students
            .find(student_id)
            .map(|s| s.passed_courses().into_iter().cloned().collect())
            .ok_or_else(|| RegistrarError::StudentNotFound(student_id.to_string()))
    }

    /// Every student with enrollments and grades, in registration order
    #[must_use]
    pub fn students_summary(&self) -> Vec<StudentSummary<'_>> {
        self.students.summary()
    }

    /// Every course with its roster size, sorted by code
    #[must_use]
    pub fn courses_summary(&self) -> Vec<CourseSummary> {
        self.courses.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grading::{FixedGradeSource, SequenceGradeSource};

    fn person(id: &str, name: &str) -> Person {
        Person::new(
            id.to_string(),
            name.to_string(),
            format!("{id}@school.edu"),
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
        )
    }

    fn fixed(grade: f64) -> Registrar {
        Registrar::new(CourseRegistry::new(), Box::new(FixedGradeSource(grade)))
    }

    #[test]
    fn test_register_duplicate_rejected() {
        let mut registrar = fixed(70.0);
        registrar.register_student(person("001", "John Doe")).unwrap();

        let err = registrar
            .register_student(person("001", "Someone Else"))
            .unwrap_err();
        assert_eq!(err, RegistrarError::AlreadyExists("001".to_string()));
        assert_eq!(registrar.find_student("001").unwrap().name(), "John Doe");
        assert_eq!(registrar.students_summary().len(), 1);
    }

    #[test]
    fn test_debug_lists_registries() {
        let mut registrar = fixed(70.0);
        registrar.register_student(person("001", "John Doe")).unwrap();

        let rendered = format!("{registrar:?}");
        assert!(rendered.starts_with("Registrar {"));
        assert!(rendered.contains("students"));
        assert!(rendered.contains("INTRO-CS-1"));
        assert!(rendered.ends_with(".. }"));
    }

    #[test]
    fn test_enroll_updates_roster_and_student() {
        let mut registrar = fixed(70.0);
        registrar.register_student(person("001", "John Doe")).unwrap();

        assert!(registrar.enroll_student("001", "INTRO-CS-1").unwrap());
        assert!(!registrar.enroll_student("001", "INTRO-CS-1").unwrap());

        let row = registrar
            .courses_summary()
            .into_iter()
            .find(|c| c.code == "INTRO-CS-1")
            .unwrap();
        assert_eq!(row.roster_size, 1);
        assert!(registrar
            .find_student("001")
            .unwrap()
            .is_course_approved("INTRO-CS-1"));
    }

    #[test]
    fn test_enroll_errors() {
        let mut registrar = fixed(70.0);
        registrar.register_student(person("001", "John Doe")).unwrap();

        assert_eq!(
            registrar.enroll_student("404", "INTRO-CS-1"),
            Err(RegistrarError::StudentNotFound("404".to_string()))
        );
        assert_eq!(
            registrar.enroll_student("001", "NOPE-1"),
            Err(RegistrarError::CourseNotFound("NOPE-1".to_string()))
        );
        assert!(registrar.courses_summary().iter().all(|c| c.roster_size == 0));
    }

    #[test]
    fn test_grade_requires_enrollment() {
        let mut registrar = fixed(70.0);
        registrar.register_student(person("001", "John Doe")).unwrap();

        assert_eq!(
            registrar.grade_student("001", "INTRO-CS-1"),
            Err(RegistrarError::NotEnrolled {
                student_id: "001".to_string(),
                course_code: "INTRO-CS-1".to_string(),
            })
        );
    }

    #[test]
    fn test_grade_report() {
        let mut registrar = fixed(42.0);
        registrar.register_student(person("001", "John Doe")).unwrap();
        registrar.enroll_student("001", "INTRO-CS-1").unwrap();

        let report = registrar.grade_student("001", "INTRO-CS-1").unwrap();
        assert!((report.grade - 42.0).abs() < f64::EPSILON);
        assert!(!report.passed);
        assert_eq!(report.course.name, "Introduction to Computer Science");
    }

    #[test]
    fn test_failed_checks_do_not_consume_grades() {
        let mut registrar = Registrar::new(
            CourseRegistry::new(),
            Box::new(SequenceGradeSource::new(vec![55.0, 91.0])),
        );
        registrar.register_student(person("001", "John Doe")).unwrap();
        assert!(registrar.grade_student("001", "INTRO-CS-1").is_err());

        registrar.enroll_student("001", "INTRO-CS-1").unwrap();
        let report = registrar.grade_student("001", "INTRO-CS-1").unwrap();
        assert!((report.grade - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_student_average_and_passed() {
        let mut registrar = fixed(70.0);
        registrar.register_student(person("001", "John Doe")).unwrap();
        assert_eq!(registrar.student_average("001"), Ok(None));

        registrar.enroll_student("001", "INTRO-CS-1").unwrap();
        registrar.enroll_student("001", "INTRO-CS-2").unwrap();
        registrar.record_grade("001", "INTRO-CS-1", 90.0).unwrap();
        registrar.record_grade("001", "INTRO-CS-2", 30.0).unwrap();

        let avg = registrar.student_average("001").unwrap().unwrap();
        assert!((avg - 60.0).abs() < 1e-9);

        let passed = registrar.passed_courses("001").unwrap();
        assert_eq!(passed.len(), 1);
        assert_eq!(passed[0].code, "INTRO-CS-1");

        assert!(registrar.student_average("404").is_err());
        assert!(registrar.passed_courses("404").is_err());
    }

    #[test]
    fn test_course_average_unknown_course() {
        let registrar = fixed(70.0);
        assert_eq!(
            registrar.course_average("NOPE-1"),
            Err(RegistrarError::CourseNotFound("NOPE-1".to_string()))
        );
    }

    #[test]
    fn test_seed_demo_students() {
        let mut registrar = fixed(70.0);
        registrar.seed_demo_students();
        registrar.seed_demo_students();

        assert_eq!(registrar.students_summary().len(), 3);
        assert!(registrar.is_registered("001"));
        assert!(registrar.is_registered("002"));
        assert!(registrar.is_registered("003"));
        assert!(!registrar.is_registered("004"));
        assert_eq!(registrar.find_student("002").unwrap().name(), "May Fair");
    }
}
