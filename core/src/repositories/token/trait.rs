//! Refresh token repository trait defining the persistence interface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for refresh token persistence
///
/// The token string is the record's primary key. Implementations are
/// responsible for their own concurrency control: `insert` must be atomic
/// with respect to duplicate keys and `revoke` must never overwrite an
/// earlier revocation time.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Persist a new refresh token
    ///
    /// # Returns
    /// * `Ok(())` - Token stored
    /// * `Err(DomainError::Token(TokenError::Conflict))` - A record with the same token exists
    /// * `Err(DomainError)` - Storage failure
    ///
    /// # Example
    /// ```no_run
    /// # use chrono::{Duration, Utc};
    /// # use uuid::Uuid;
    /// # use chirpy_core::domain::entities::token::RefreshToken;
    /// # use chirpy_core::repositories::RefreshTokenRepository;
    /// # async fn example(repo: &impl RefreshTokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let token = RefreshToken::new("ab12...", Uuid::new_v4(), Utc::now(), Duration::days(60));
    /// repo.insert(token).await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn insert(&self, token: RefreshToken) -> Result<(), DomainError>;

    /// Find a refresh token record by its token string
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Record found, whatever its state
    /// * `Ok(None)` - No record
    /// * `Err(DomainError)` - Storage failure
    async fn find(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Mark a refresh token revoked at `at` if it is not revoked already
    ///
    /// # Returns
    /// * `Ok(true)` - Token transitioned to revoked
    /// * `Ok(false)` - Token missing or already revoked
    /// * `Err(DomainError)` - Storage failure
    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> Result<bool, DomainError>;
}
