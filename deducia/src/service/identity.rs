//! Signup and login over phone-keyed accounts.
//!
//! The phone number is the sole credential: login succeeds when a matching
//! account exists and fails with `UnknownUser` otherwise. Signup is
//! idempotent-friendly: registering an existing number reports
//! `AlreadyRegistered` instead of raising an error, so naive clients can
//! retry without special handling.
use crate::error::DeduciaError;
use crate::repository::user_repository::UserRepository;
use crate::types::{Role, User};
use std::sync::Arc;

#[allow(clippy::module_name_repetitions)]
pub struct IdentityService {
    repo: Arc<dyn UserRepository>,
}

/// Outcome of a signup attempt. `AlreadyRegistered` is a soft conflict,
/// not an error.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum SignupOutcome {
    Created(User),
    AlreadyRegistered,
}

impl IdentityService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Resolves the account registered for `phone`.
    ///
    /// The presence check runs before any store access: a blank phone number
    /// never reaches the repository.
    ///
    /// # Errors
    ///
    /// * `DeduciaError::MissingField` - If `phone` is empty.
    /// * `DeduciaError::UnknownUser` - If no account exists for the number.
    /// * Any repository error is passed through unchanged.
    pub fn login(&self, phone: &str) -> Result<User, DeduciaError> {
        if phone.trim().is_empty() {
            return Err(DeduciaError::MissingField("phone"));
        }
        match self.repo.find_by_phone(phone)? {
            Some(user) => Ok(user),
            None => Err(DeduciaError::UnknownUser(phone.to_string())),
        }
    }

    /// Registers a new student account for `phone`.
    ///
    /// The lookup is a fast path only; two concurrent signups for the same
    /// number can both miss it, and the repository's uniqueness constraint
    /// decides the winner. The loser is reported as `AlreadyRegistered`.
    ///
    /// # Errors
    ///
    /// Returns a `DeduciaError` if the lookup or the insert fails.
    pub fn signup(&self, phone: &str, full_name: &str) -> Result<SignupOutcome, DeduciaError> {
        if self.repo.find_by_phone(phone)?.is_some() {
            return Ok(SignupOutcome::AlreadyRegistered);
        }
        match self.repo.create_user(phone, full_name, Role::Student)? {
            Some(user) => Ok(SignupOutcome::Created(user)),
            None => Ok(SignupOutcome::AlreadyRegistered),
        }
    }
}
