//! Authentication route handlers
//!
//! - Login with email and password
//! - Access token refresh
//! - Refresh token revocation

pub mod login;
pub mod refresh;
pub mod revoke;

use std::sync::Arc;

use chirpy_core::repositories::{CredentialRepository, RefreshTokenRepository};
use chirpy_core::services::auth::AuthService;

pub use login::login;
pub use refresh::refresh;
pub use revoke::revoke;

/// Application state that holds shared services
pub struct AppState<R, U>
where
    R: RefreshTokenRepository,
    U: CredentialRepository,
{
    pub auth_service: Arc<AuthService<R, U>>,
    /// Key webhook callers present with the `ApiKey` scheme; empty rejects all
    pub webhook_api_key: Arc<str>,
}

impl<R, U> AppState<R, U>
where
    R: RefreshTokenRepository,
    U: CredentialRepository,
{
    pub fn new(auth_service: Arc<AuthService<R, U>>) -> Self {
        Self {
            auth_service,
            webhook_api_key: Arc::from(""),
        }
    }

    /// Set the webhook API key
    pub fn with_webhook_api_key(mut self, key: impl Into<Arc<str>>) -> Self {
        self.webhook_api_key = key.into();
        self
    }
}
