//! # Chirpy Core
//!
//! Authentication and session logic for the Chirpy backend.
//! This crate contains the domain entities, the credential, password and
//! token services, repository interfaces and the error types they share.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::{Claims, RefreshToken, UserCredential};
pub use errors::{
    AuthError, CredentialError, DomainError, DomainResult, PasswordError, TokenError,
    ValidationError,
};
pub use repositories::{
    CredentialRepository, InMemoryCredentialRepository, InMemoryRefreshTokenRepository,
    RefreshTokenRepository,
};
pub use services::{
    AuthService, AuthServiceConfig, Clock, LoginResult, ManualClock, PasswordHasher,
    RefreshTokenStore, SystemClock, TokenServiceConfig, TokenSigner,
};
