//! Error types for credential extraction, token management, password
//! hashing and input validation.
//!
//! The presentation layer decides what a client gets to see.

use thiserror::Error;

/// Failures parsing the `Authorization` header
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("No authorization header found")]
    MissingHeader,

    #[error("Invalid authorization header")]
    MalformedHeader,
}

/// Access and refresh token failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed")]
    Malformed,

    #[error("Refresh token not found")]
    NotFound,

    #[error("Refresh token revoked")]
    Revoked,

    #[error("Refresh token already exists")]
    Conflict,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Authentication decisions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two are never distinguished.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Invalid API key")]
    InvalidApiKey,
}

/// Password hashing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Stored password digest is invalid")]
    InvalidDigest,

    #[error("Password hashing failed")]
    HashingFailed,
}

/// Input validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Email already registered")]
    DuplicateEmail,
}
