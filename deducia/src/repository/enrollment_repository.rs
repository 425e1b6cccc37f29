use crate::error::DeduciaError;
use crate::types::{Course, TestResult};

/// A trait for recording course enrollments and reading student progress.
///
/// At most one enrollment may exist per `(student_id, course_id)` pair; the
/// storage layer enforces this with a unique constraint, and `insert` reports
/// a lost race as a no-op rather than an error.
pub trait EnrollmentRepository: Send + Sync {
    /// Checks whether the student is already enrolled in the course.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the query fails.
    fn exists(&self, student_id: i64, course_id: i64) -> Result<bool, DeduciaError>;

    /// Records the enrollment.
    ///
    /// # Returns
    /// * `Ok(true)` - A new enrollment row was written.
    /// * `Ok(false)` - The pair already existed; nothing was written.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the insert fails for any other reason.
    fn insert(&self, student_id: i64, course_id: i64) -> Result<bool, DeduciaError>;

    /// Returns the courses the student is enrolled in.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the query fails.
    fn courses_for_student(&self, student_id: i64) -> Result<Vec<Course>, DeduciaError>;

    /// Returns the student's graded results joined with test metadata.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the query fails.
    fn results_for_student(&self, student_id: i64) -> Result<Vec<TestResult>, DeduciaError>;
}
