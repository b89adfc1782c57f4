//! MySQL implementation of the CredentialRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use chirpy_core::domain::entities::user::UserCredential;
use chirpy_core::errors::{DomainError, ValidationError};
use chirpy_core::repositories::CredentialRepository;

use super::{is_unique_violation, storage_error};

/// MySQL implementation of CredentialRepository over the `users` table
pub struct MySqlCredentialRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCredentialRepository {
    /// Create a new MySQL credential repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_credential(row: &sqlx::mysql::MySqlRow) -> Result<UserCredential, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;

        Ok(UserCredential {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid user UUID: {}", e) })?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get email: {}", e) })?,
            password_hash: row
                .try_get("hashed_password")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get hashed_password: {}", e) })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get updated_at: {}", e) })?,
        })
    }
}

#[async_trait]
impl CredentialRepository for MySqlCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>, DomainError> {
        let query = r#"
            SELECT id, email, hashed_password, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find user by email", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_credential(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, credential: UserCredential) -> Result<UserCredential, DomainError> {
        let query = r#"
            INSERT INTO users (id, email, hashed_password, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(credential.id.to_string())
            .bind(&credential.email)
            .bind(&credential.password_hash)
            .bind(credential.created_at)
            .bind(credential.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::from(ValidationError::DuplicateEmail)
                } else {
                    storage_error("Failed to create user", e)
                }
            })?;

        Ok(credential)
    }
}
