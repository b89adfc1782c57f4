//! Repository interfaces for persistence collaborators, with in-memory
//! implementations for tests and local development.

pub mod token;
pub mod user;

pub use token::{InMemoryRefreshTokenRepository, RefreshTokenRepository};
pub use user::{CredentialRepository, InMemoryCredentialRepository};
