//! Credential repository trait for the user-account collaborator.

use async_trait::async_trait;

use crate::domain::entities::user::UserCredential;
use crate::errors::DomainError;

/// Repository trait for user credentials
///
/// Only the narrow slice of the user account that authentication needs:
/// look up by email and create with an already-hashed password.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Find a credential by email
    ///
    /// # Returns
    /// * `Ok(Some(UserCredential))` - Credential found
    /// * `Ok(None)` - No account with that email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>, DomainError>;

    /// Persist a new credential
    ///
    /// # Returns
    /// * `Ok(UserCredential)` - The stored credential
    /// * `Err(DomainError::Validation(ValidationError::DuplicateEmail))` - Email taken
    /// * `Err(DomainError)` - Storage failure
    async fn create(&self, credential: UserCredential) -> Result<UserCredential, DomainError>;
}
