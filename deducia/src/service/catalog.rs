use crate::error::DeduciaError;
use crate::repository::course_repository::CourseRepository;
use crate::types::{Course, NewCourse};
use std::sync::Arc;

#[allow(clippy::module_name_repetitions)]
pub struct CatalogService {
    repo: Arc<dyn CourseRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    /// Lists the catalog, optionally scoped to one teacher's courses.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the repository query fails.
    pub fn list_courses(&self, teacher_id: Option<i64>) -> Result<Vec<Course>, DeduciaError> {
        match teacher_id {
            Some(teacher_id) => self.repo.find_by_teacher(teacher_id),
            None => self.repo.find_all(),
        }
    }

    /// Adds a course and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the insert fails.
    pub fn create_course(&self, course: &NewCourse) -> Result<i64, DeduciaError> {
        self.repo.add_course(course)
    }

    /// Deletes a course by id. Unknown ids are deleted successfully too.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the delete statement fails.
    pub fn delete_course(&self, id: i64) -> Result<(), DeduciaError> {
        self.repo.delete_by_id(id)
    }
}
