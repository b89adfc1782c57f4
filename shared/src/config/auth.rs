//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::env_or;

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// Access tokens live for one hour
const DEFAULT_ACCESS_TOKEN_EXPIRY_SECS: i64 = 3600;

/// Refresh tokens live for 60 days
const DEFAULT_REFRESH_TOKEN_EXPIRY_SECS: i64 = 60 * 24 * 60 * 60;

/// bcrypt work factor used when no override is configured
const DEFAULT_BCRYPT_COST: u32 = 12;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret used to sign and verify access tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY_SECS,
            refresh_token_expiry: DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in seconds
    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Static key webhook callers present with the `ApiKey` scheme.
    /// An empty key rejects every webhook call.
    #[serde(default)]
    pub webhook_api_key: String,

    /// bcrypt work factor for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            webhook_api_key: String::new(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// - `SECRET` - JWT signing secret
    /// - `POLKA_KEY` - webhook API key
    /// - `ACCESS_TOKEN_TTL_SECS` - access token lifetime in seconds
    /// - `REFRESH_TOKEN_TTL_DAYS` - refresh token lifetime in days
    /// - `BCRYPT_COST` - bcrypt work factor
    pub fn from_env() -> Self {
        let secret = std::env::var("SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let refresh_days = env_or(
            "REFRESH_TOKEN_TTL_DAYS",
            DEFAULT_REFRESH_TOKEN_EXPIRY_SECS / 86400,
        );

        Self {
            jwt: JwtConfig::new(secret)
                .with_access_expiry_seconds(env_or(
                    "ACCESS_TOKEN_TTL_SECS",
                    DEFAULT_ACCESS_TOKEN_EXPIRY_SECS,
                ))
                .with_refresh_expiry_days(refresh_days),
            webhook_api_key: std::env::var("POLKA_KEY").unwrap_or_default(),
            bcrypt_cost: env_or("BCRYPT_COST", DEFAULT_BCRYPT_COST),
        }
    }
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 3600);
        assert_eq!(config.refresh_token_expiry, 5_184_000);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret")
            .with_access_expiry_seconds(1800)
            .with_refresh_expiry_days(14);

        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.refresh_token_expiry, 1_209_600);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_auth_config_default_rejects_webhooks() {
        let config = AuthConfig::default();
        assert!(config.webhook_api_key.is_empty());
        assert_eq!(config.bcrypt_cost, 12);
        assert!(config.jwt.is_using_default_secret());
    }

    #[test]
    fn test_auth_config_deserializes_with_defaults() {
        let json = r#"{
            "jwt": {
                "secret": "s",
                "access_token_expiry": 60,
                "refresh_token_expiry": 120
            }
        }"#;

        let config: AuthConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.jwt.secret, "s");
        assert_eq!(config.jwt.access_token_expiry, 60);
        assert_eq!(config.bcrypt_cost, 12);
        assert!(config.webhook_api_key.is_empty());
    }
}
