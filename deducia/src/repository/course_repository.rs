use crate::error::DeduciaError;
use crate::types::{Course, NewCourse};

/// A trait for managing the course catalog.
pub trait CourseRepository: Send + Sync {
    /// Inserts a new course and returns its generated id.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the insert fails.
    fn add_course(&self, course: &NewCourse) -> Result<i64, DeduciaError>;

    /// Returns every course in the catalog, in store iteration order.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the query fails.
    fn find_all(&self) -> Result<Vec<Course>, DeduciaError>;

    /// Returns the courses authored by the given teacher.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the query fails.
    fn find_by_teacher(&self, teacher_id: i64) -> Result<Vec<Course>, DeduciaError>;

    /// Deletes a course by primary key. Deleting an id with no matching row
    /// is not an error.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the delete statement fails.
    fn delete_by_id(&self, id: i64) -> Result<(), DeduciaError>;
}
