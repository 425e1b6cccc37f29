use crate::error::DeduciaError;
use crate::repository::enrollment_repository::EnrollmentRepository;
use crate::types::{Course, TestResult};
use std::sync::Arc;

#[allow(clippy::module_name_repetitions)]
pub struct EnrollmentService {
    repo: Arc<dyn EnrollmentRepository>,
}

/// Outcome of an enroll attempt. Both variants are successes from the
/// caller's point of view; `AlreadyEnrolled` just skips the write.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum EnrollOutcome {
    Enrolled,
    AlreadyEnrolled,
}

impl EnrollmentService {
    pub fn new(repo: Arc<dyn EnrollmentRepository>) -> Self {
        Self { repo }
    }

    /// Enrolls the student in the course, at most once.
    ///
    /// The existence check is a fast path; when two requests race past it,
    /// the unique pair constraint lets only one insert through and the other
    /// is reported as `AlreadyEnrolled`.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the lookup or the insert fails.
    pub fn enroll(&self, student_id: i64, course_id: i64) -> Result<EnrollOutcome, DeduciaError> {
        if self.repo.exists(student_id, course_id)? {
            return Ok(EnrollOutcome::AlreadyEnrolled);
        }
        if self.repo.insert(student_id, course_id)? {
            Ok(EnrollOutcome::Enrolled)
        } else {
            Ok(EnrollOutcome::AlreadyEnrolled)
        }
    }

    /// Returns the courses the student has joined.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the query fails.
    pub fn my_batches(&self, student_id: i64) -> Result<Vec<Course>, DeduciaError> {
        self.repo.courses_for_student(student_id)
    }

    /// Returns the student's graded results with test titles attached.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the query fails.
    pub fn my_results(&self, student_id: i64) -> Result<Vec<TestResult>, DeduciaError> {
        self.repo.results_for_student(student_id)
    }
}
