//! MySQL repository implementations

mod credential_repository_impl;
mod refresh_token_repository_impl;

pub use credential_repository_impl::MySqlCredentialRepository;
pub use refresh_token_repository_impl::MySqlRefreshTokenRepository;

use chirpy_core::errors::DomainError;

/// Wrap a SQLx failure as a storage error, logging the detail
pub(crate) fn storage_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, "{}", context);
    DomainError::Storage {
        message: format!("{}: {}", context, e),
    }
}

/// Whether a SQLx failure is a primary key or unique index collision
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
