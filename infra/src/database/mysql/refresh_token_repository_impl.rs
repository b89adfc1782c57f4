//! MySQL implementation of the RefreshTokenRepository trait.
//!
//! The raw token string is the primary key of `refresh_tokens`, so a
//! duplicate insert surfaces as a unique violation from MySQL itself.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use chirpy_core::domain::entities::token::RefreshToken;
use chirpy_core::errors::{DomainError, TokenError};
use chirpy_core::repositories::RefreshTokenRepository;

use super::{is_unique_violation, storage_error};

/// MySQL implementation of RefreshTokenRepository
pub struct MySqlRefreshTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRefreshTokenRepository {
    /// Create a new MySQL refresh token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get user_id: {}", e) })?;

        Ok(RefreshToken {
            token: row
                .try_get("token")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get token: {}", e) })?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid user UUID: {}", e) })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get expires_at: {}", e) })?,
            revoked_at: row
                .try_get::<Option<DateTime<Utc>>, _>("revoked_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get revoked_at: {}", e) })?,
        })
    }
}

#[async_trait]
impl RefreshTokenRepository for MySqlRefreshTokenRepository {
    async fn insert(&self, token: RefreshToken) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                token, user_id, created_at, updated_at, expires_at, revoked_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&token.token)
            .bind(token.user_id.to_string())
            .bind(token.created_at)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.revoked_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::from(TokenError::Conflict)
                } else {
                    storage_error("Failed to save refresh token", e)
                }
            })?;

        Ok(())
    }

    async fn find(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT token, user_id, created_at, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find refresh token", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> Result<bool, DomainError> {
        // The NULL guard keeps the first revocation time under concurrent revokes.
        let query = r#"
            UPDATE refresh_tokens
            SET revoked_at = ?, updated_at = ?
            WHERE token = ? AND revoked_at IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(at)
            .bind(at)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to revoke refresh token", e))?;

        Ok(result.rows_affected() > 0)
    }
}
