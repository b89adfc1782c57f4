//! HS256 access token issuance and validation

use std::collections::HashSet;
use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};
use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};
use crate::services::clock::Clock;

/// Issues and validates compact HS256 access tokens.
///
/// Holds only the signing secret and a clock; safe to share across
/// threads behind an `Arc`.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenSigner {
    /// Creates a signer for `secret`
    ///
    /// # Arguments
    ///
    /// * `secret` - Shared HMAC secret
    /// * `clock` - Time source for `iat`, `exp` and expiry checks
    pub fn new(secret: &str, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        // Expiry is checked against the injected clock after decoding.
        validation.validate_exp = false;
        validation.required_spec_claims = ["exp", "iss", "sub"]
            .iter()
            .map(|claim| claim.to_string())
            .collect::<HashSet<_>>();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock,
        }
    }

    /// Issues an access token for `user_id` valid for `ttl`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - `header.claims.signature`, base64url without padding
    /// * `Err(DomainError)` - Encoding failed
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(user_id, self.clock.now(), ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            DomainError::from(TokenError::GenerationFailed)
        })
    }

    /// Validates an access token and returns its subject
    ///
    /// The signature is verified before any claim is trusted.
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidSignature` - Wrong secret, tampered token or non-HS256 algorithm
    /// * `TokenError::Malformed` - Bad segments, encoding, claims or subject
    /// * `TokenError::Expired` - The clock has reached `exp`
    pub fn validate(&self, token: &str) -> Result<Uuid, TokenError> {
        if !signature_segment_decodes(token) {
            return Err(TokenError::Malformed);
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::MissingAlgorithm => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        let claims = data.claims;

        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        claims.user_id().map_err(|_| TokenError::Malformed)
    }
}

// jsonwebtoken compares signatures in encoded form, so an undecodable
// segment would otherwise surface as a mismatch.
fn signature_segment_decodes(token: &str) -> bool {
    token
        .rsplit('.')
        .next()
        .map_or(false, |segment| BASE64URL.decode(segment).is_ok())
}
