use crate::error::DeduciaError;
use crate::types::{NewQuestion, NewTest, Question, Test};

/// A trait for managing timed tests and their question banks.
pub trait AssessmentRepository: Send + Sync {
    /// Inserts a new test and returns its generated id.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the insert fails.
    fn add_test(&self, test: &NewTest) -> Result<i64, DeduciaError>;

    /// Returns every test, in store iteration order.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the query fails.
    fn find_all_tests(&self) -> Result<Vec<Test>, DeduciaError>;

    /// Inserts a question tied to its test. The referenced `test_id` is
    /// passed through unchanged; it is not checked for existence here.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the insert fails.
    fn add_question(&self, question: &NewQuestion) -> Result<(), DeduciaError>;

    /// Returns all questions belonging to the given test.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the query fails.
    fn questions_for_test(&self, test_id: i64) -> Result<Vec<Question>, DeduciaError>;
}
