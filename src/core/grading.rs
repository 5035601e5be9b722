//! Grade generation
//!
//! Grades are produced by a [`GradeSource`] injected into the registrar, so
//! callers can choose between seeded randomness and fixed values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimum grade a recorded grade may take
pub const MIN_GRADE: f64 = 0.0;

/// Maximum grade a recorded grade may take
pub const MAX_GRADE: f64 = 100.0;

/// A grade at or above this value passes the course
pub const PASSING_GRADE: f64 = 50.0;

/// Lower bound (inclusive) of generated grades
pub const GENERATED_GRADE_FLOOR: f64 = 40.0;

/// Upper bound (exclusive) of generated grades
pub const GENERATED_GRADE_CEILING: f64 = 100.0;

/// Whether a grade passes
#[must_use]
pub fn is_passing(grade: f64) -> bool {
    grade >= PASSING_GRADE
}

/// Whether a grade lies in the accepted `[0, 100]` range
#[must_use]
pub fn is_valid_grade(grade: f64) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&grade)
}

/// Source of grades for auto-grading
pub trait GradeSource: Send {
    /// Produce the next grade
    fn next_grade(&mut self) -> f64;
}

/// Uniformly distributed grades in `[40, 100)`
#[derive(Debug, Clone)]
pub struct RandomGradeSource {
    rng: StdRng,
}

impl RandomGradeSource {
    /// Seeded source; the same seed yields the same sequence of grades
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from operating system entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl GradeSource for RandomGradeSource {
    fn next_grade(&mut self) -> f64 {
        self.rng
            .gen_range(GENERATED_GRADE_FLOOR..GENERATED_GRADE_CEILING)
    }
}

/// Always returns the same grade
#[derive(Debug, Clone, Copy)]
pub struct FixedGradeSource(pub f64);

impl GradeSource for FixedGradeSource {
    fn next_grade(&mut self) -> f64 {
        self.0
    }
}

/// Replays a list of grades in order, then repeats the last one
#[derive(Debug, Clone)]
pub struct SequenceGradeSource {
    grades: Vec<f64>,
    next: usize,
}

impl SequenceGradeSource {
    /// Create a source replaying `grades`
    ///
    /// An empty list yields the generated-grade floor.
    #[must_use]
    pub const fn new(grades: Vec<f64>) -> Self {
        Self { grades, next: 0 }
    }
}

impl GradeSource for SequenceGradeSource {
    fn next_grade(&mut self) -> f64 {
        let grade = self
            .grades
            .get(self.next)
            .or_else(|| self.grades.last())
            .copied()
            .unwrap_or(GENERATED_GRADE_FLOOR);
        self.next += 1;
        grade
    }
}
