//! In-memory implementation of CredentialRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::UserCredential;
use crate::errors::{DomainError, ValidationError};

use super::r#trait::CredentialRepository;

/// Credential repository keyed by email
#[derive(Clone, Default)]
pub struct InMemoryCredentialRepository {
    users: Arc<RwLock<HashMap<String, UserCredential>>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn create(&self, credential: UserCredential) -> Result<UserCredential, DomainError> {
        let mut users = self.users.write().await;

        if users.contains_key(&credential.email) {
            return Err(ValidationError::DuplicateEmail.into());
        }

        users.insert(credential.email.clone(), credential.clone());
        Ok(credential)
    }
}
