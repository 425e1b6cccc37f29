use crate::error::DeduciaError;
use crate::repository::support_repository::SupportRepository;
use crate::types::{MentorRequestDetails, NewMentorRequest, NewSupportMessage};
use chrono::Utc;
use std::sync::Arc;

#[allow(clippy::module_name_repetitions)]
pub struct SupportService {
    repo: Arc<dyn SupportRepository>,
}

impl SupportService {
    pub fn new(repo: Arc<dyn SupportRepository>) -> Self {
        Self { repo }
    }

    /// Files a mentor request, stamped with the current time as its
    /// ordering key.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the insert fails.
    pub fn request_mentor(&self, request: &NewMentorRequest) -> Result<(), DeduciaError> {
        self.repo.add_mentor_request(request, Utc::now())
    }

    /// Lists mentor requests for the teacher dashboard, newest first, with
    /// the requesting student's name and phone attached.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the query fails.
    pub fn list_mentor_requests(&self) -> Result<Vec<MentorRequestDetails>, DeduciaError> {
        self.repo.list_mentor_requests()
    }

    /// Records a contact message and returns its ticket number.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the insert fails.
    pub fn submit_contact(&self, message: &NewSupportMessage) -> Result<i64, DeduciaError> {
        self.repo.add_support_message(message)
    }
}
