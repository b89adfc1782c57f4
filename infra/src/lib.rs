//! # Infrastructure Layer
//!
//! MySQL persistence for the Chirpy authentication core, built on SQLx.
//!
//! - **Database**: connection pool, migrations, and the credential and
//!   refresh token repositories

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlCredentialRepository, MySqlRefreshTokenRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
