//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, CredentialError, PasswordError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Whether this error means the caller could not be authenticated,
    /// as opposed to a server-side failure or bad input.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            DomainError::Credential(_) | DomainError::Token(_) | DomainError::Auth(_)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_failures_are_unauthorized() {
        assert!(DomainError::from(CredentialError::MissingHeader).is_unauthorized());
        assert!(DomainError::from(TokenError::Revoked).is_unauthorized());
        assert!(DomainError::from(AuthError::InvalidCredentials).is_unauthorized());
    }

    #[test]
    fn test_server_failures_are_not_unauthorized() {
        let storage = DomainError::Storage {
            message: "connection reset".to_string(),
        };
        assert!(!storage.is_unauthorized());
        assert!(!DomainError::from(PasswordError::HashingFailed).is_unauthorized());
        assert!(!DomainError::from(ValidationError::DuplicateEmail).is_unauthorized());
    }

    #[test]
    fn test_transparent_messages() {
        assert_eq!(
            DomainError::from(TokenError::Expired).to_string(),
            "Token is expired"
        );
        assert_eq!(
            DomainError::from(CredentialError::MalformedHeader).to_string(),
            "Invalid authorization header"
        );
    }
}
