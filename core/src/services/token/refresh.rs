//! Opaque refresh token generation and lifecycle

use std::sync::Arc;

use chrono::Duration;
use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;

use crate::domain::entities::token::{RefreshToken, REFRESH_TOKEN_BYTES};
use crate::errors::{DomainError, TokenError};
use crate::repositories::RefreshTokenRepository;
use crate::services::clock::Clock;

/// Manages refresh tokens against a persistence collaborator.
///
/// Expiry is enforced lazily on lookup. Nothing here deletes records, so
/// an expired token keeps reporting `Expired` rather than `NotFound`.
pub struct RefreshTokenStore<R: RefreshTokenRepository> {
    pub(crate) repository: R,
    clock: Arc<dyn Clock>,
}

impl<R: RefreshTokenRepository> RefreshTokenStore<R> {
    pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Draws 32 bytes from the OS CSPRNG and hex-encodes them
    ///
    /// # Returns
    ///
    /// A 64 character lowercase hexadecimal string
    pub fn generate(&self) -> String {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Persists `token` bound to `user_id`, expiring `ttl` from now
    ///
    /// # Errors
    ///
    /// * `TokenError::Conflict` - The token string already exists
    /// * `DomainError::Storage` - Persistence failed
    pub async fn create(&self, token: &str, user_id: Uuid, ttl: Duration) -> Result<RefreshToken, DomainError> {
        let record = RefreshToken::new(token, user_id, self.clock.now(), ttl);

        match self.repository.insert(record.clone()).await {
            Ok(()) => Ok(record),
            Err(DomainError::Token(TokenError::Conflict)) => {
                tracing::warn!(
                    user_id = %user_id,
                    "Refresh token collided with an existing record"
                );
                Err(TokenError::Conflict.into())
            }
            Err(e) => Err(e),
        }
    }

    /// Generates a fresh token and persists it for `user_id`
    pub async fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<RefreshToken, DomainError> {
        let token = self.generate();
        self.create(&token, user_id, ttl).await
    }

    /// Resolves the user bound to `token` without modifying anything
    ///
    /// # Errors
    ///
    /// * `TokenError::NotFound` - No record
    /// * `TokenError::Expired` - Past `expires_at`
    /// * `TokenError::Revoked` - Explicitly revoked
    /// * `DomainError::Storage` - Persistence failed
    pub async fn lookup(&self, token: &str) -> Result<Uuid, DomainError> {
        let record = self
            .repository
            .find(token)
            .await?
            .ok_or(TokenError::NotFound)?;

        if record.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired.into());
        }

        if record.is_revoked() {
            return Err(TokenError::Revoked.into());
        }

        Ok(record.user_id)
    }

    /// Revokes `token`.
    ///
    /// Succeeds when the token is unknown or already revoked; only a
    /// storage failure is an error.
    pub async fn revoke(&self, token: &str) -> Result<(), DomainError> {
        let revoked = self.repository.revoke(token, self.clock.now()).await?;

        if revoked {
            tracing::debug!("Refresh token revoked");
        }

        Ok(())
    }
}
