//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (1 hour)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 60 * 60;

/// Refresh token expiration time (60 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 60;

/// JWT issuer
pub const JWT_ISSUER: &str = "chirpy";

/// Number of random bytes in a refresh token
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Claims structure for the access token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for an access token issued at `now`
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `now` - Issue time
    /// * `ttl` - Lifetime of the token
    pub fn new_access_token(user_id: Uuid, now: DateTime<Utc>, ttl: Duration) -> Self {
        let expiry = now + ttl;

        Self {
            iss: JWT_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks whether the claims have expired at `now`.
    ///
    /// `exp` is exclusive: a token is no longer valid in the second it
    /// expires.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the subject can be parsed as a UUID, `Err` otherwise
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token record stored in the database.
///
/// The token string itself is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// 64 lowercase hex characters
    pub token: String,

    /// User ID this token is bound to
    pub user_id: Uuid,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the token was revoked, if it was
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Creates a new, unrevoked refresh token record
    ///
    /// # Arguments
    ///
    /// * `token` - The opaque token string
    /// * `user_id` - The user's UUID
    /// * `now` - Creation time
    /// * `ttl` - Lifetime of the token
    pub fn new(token: impl Into<String>, user_id: Uuid, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token: token.into(),
            user_id,
            created_at: now,
            expires_at: now + ttl,
            revoked_at: None,
        }
    }

    /// Checks if the refresh token has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Checks if the refresh token has been revoked
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Revokes the refresh token. The first revocation time is kept.
    pub fn revoke(&mut self, at: DateTime<Utc>) {
        if self.revoked_at.is_none() {
            self.revoked_at = Some(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_access_claims_window() {
        let user_id = Uuid::new_v4();
        let now = fixed_now();
        let claims = Claims::new_access_token(user_id, now, Duration::seconds(ACCESS_TOKEN_EXPIRY_SECONDS));

        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXPIRY_SECONDS);
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_access_claims_expiry_is_exclusive() {
        let now = fixed_now();
        let claims = Claims::new_access_token(Uuid::new_v4(), now, Duration::seconds(10));

        assert!(!claims.is_expired_at(now + Duration::seconds(9)));
        assert!(claims.is_expired_at(now + Duration::seconds(10)));
    }

    #[test]
    fn test_zero_ttl_claims_are_expired_immediately() {
        let now = fixed_now();
        let claims = Claims::new_access_token(Uuid::new_v4(), now, Duration::zero());
        assert!(claims.is_expired_at(now));
    }

    #[test]
    fn test_refresh_token_lifecycle() {
        let now = fixed_now();
        let mut token = RefreshToken::new("abc", Uuid::new_v4(), now, Duration::days(REFRESH_TOKEN_EXPIRY_DAYS));

        assert_eq!(token.expires_at - token.created_at, Duration::days(60));
        assert!(!token.is_revoked());
        assert!(!token.is_expired_at(token.expires_at));
        assert!(token.is_expired_at(token.expires_at + Duration::seconds(1)));

        token.revoke(now + Duration::hours(1));
        token.revoke(now + Duration::hours(2));
        assert_eq!(token.revoked_at, Some(now + Duration::hours(1)));
    }
}
