use crate::error::DeduciaError;
use crate::types::{Role, User};

/// A trait for resolving and registering accounts in a storage repository.
///
/// The phone number is the business key: lookups and registrations are
/// keyed by it, and the storage layer is expected to enforce its uniqueness.
pub trait UserRepository: Send + Sync {
    /// Looks up the account registered for the given phone number.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - If an account with this phone number exists.
    /// * `Ok(None)` - If no account is registered for the number.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the underlying query fails.
    fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DeduciaError>;

    /// Registers a new account for the given phone number.
    ///
    /// The phone uniqueness constraint is the authoritative duplicate check:
    /// a concurrent registration for the same number loses the race and is
    /// reported as `Ok(None)` rather than as an error.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The stored account, including its generated id.
    /// * `Ok(None)` - If the phone number is already taken.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the insert fails for any other reason.
    fn create_user(
        &self,
        phone: &str,
        full_name: &str,
        role: Role,
    ) -> Result<Option<User>, DeduciaError>;
}
