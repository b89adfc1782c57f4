//! Configuration for the token services

use chirpy_shared::config::JwtConfig;
use chrono::Duration;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_SECONDS, REFRESH_TOKEN_EXPIRY_DAYS};

/// Configuration for the token signer and refresh token store
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Shared HMAC signing secret
    pub jwt_secret: String,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_ttl: Duration::seconds(ACCESS_TOKEN_EXPIRY_SECONDS),
            refresh_token_ttl: Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            access_token_ttl: Duration::seconds(config.access_token_expiry),
            refresh_token_ttl: Duration::seconds(config.refresh_token_expiry),
        }
    }
}
