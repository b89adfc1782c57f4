//! Configuration for the authentication service

use chirpy_shared::config::AuthConfig;

use crate::services::token::TokenServiceConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Signing secret and token lifetimes
    pub tokens: TokenServiceConfig,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            tokens: TokenServiceConfig::default(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            tokens: TokenServiceConfig::from(&config.jwt),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
