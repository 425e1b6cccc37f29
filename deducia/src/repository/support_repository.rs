use crate::error::DeduciaError;
use crate::types::{MentorRequestDetails, NewMentorRequest, NewSupportMessage};
use chrono::{DateTime, Utc};

/// A trait for the mentor-request and contact-message intake.
pub trait SupportRepository: Send + Sync {
    /// Records a mentor request stamped with the given request date.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the insert fails.
    fn add_mentor_request(
        &self,
        request: &NewMentorRequest,
        request_date: DateTime<Utc>,
    ) -> Result<(), DeduciaError>;

    /// Returns all mentor requests joined with the requesting student's
    /// identity, most recent first.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the query fails.
    fn list_mentor_requests(&self) -> Result<Vec<MentorRequestDetails>, DeduciaError>;

    /// Records a contact message and returns its generated ticket id.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the insert fails.
    fn add_support_message(&self, message: &NewSupportMessage) -> Result<i64, DeduciaError>;
}
