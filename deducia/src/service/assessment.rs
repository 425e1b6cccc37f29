use crate::error::DeduciaError;
use crate::repository::assessment_repository::AssessmentRepository;
use crate::types::{NewQuestion, NewTest, Question, Test};
use std::sync::Arc;

#[allow(clippy::module_name_repetitions)]
pub struct AssessmentService {
    repo: Arc<dyn AssessmentRepository>,
}

impl AssessmentService {
    pub fn new(repo: Arc<dyn AssessmentRepository>) -> Self {
        Self { repo }
    }

    /// Creates a timed test and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the insert fails.
    pub fn create_test(&self, test: &NewTest) -> Result<i64, DeduciaError> {
        self.repo.add_test(test)
    }

    /// Lists every test on the platform.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the query fails.
    pub fn list_tests(&self) -> Result<Vec<Test>, DeduciaError> {
        self.repo.find_all_tests()
    }

    /// Adds a question to a test's bank. The test id is taken on trust;
    /// referential integrity lives with the store.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the insert fails.
    pub fn add_question(&self, question: &NewQuestion) -> Result<(), DeduciaError> {
        self.repo.add_question(question)
    }

    /// Returns the question set a student sees when starting a test.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the query fails.
    pub fn questions_for_test(&self, test_id: i64) -> Result<Vec<Question>, DeduciaError> {
        self.repo.questions_for_test(test_id)
    }
}
