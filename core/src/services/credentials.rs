//! `Authorization` header parsing for the bearer and API key schemes.
//!
//! Callers pass the raw header value (or `None` when the header is
//! absent) so this module stays independent of any HTTP framework.

use constant_time_eq::constant_time_eq;

use crate::errors::{AuthError, CredentialError, DomainError};

/// Scheme prefix for session tokens
pub const BEARER_PREFIX: &str = "Bearer ";

/// Scheme prefix for static service keys
pub const API_KEY_PREFIX: &str = "ApiKey ";

/// Extract the token from a `Bearer <token>` header value.
///
/// The remainder after the prefix is returned verbatim; validating its
/// shape is left to the token signer or refresh store.
///
/// # Errors
///
/// * `CredentialError::MissingHeader` - Header absent or empty
/// * `CredentialError::MalformedHeader` - Value does not start with `"Bearer "`
pub fn parse_bearer(authorization: Option<&str>) -> Result<String, CredentialError> {
    strip_scheme(authorization, BEARER_PREFIX)
}

/// Extract the key from an `ApiKey <key>` header value.
///
/// Same contract as [`parse_bearer`] with the `"ApiKey "` prefix.
pub fn parse_api_key(authorization: Option<&str>) -> Result<String, CredentialError> {
    strip_scheme(authorization, API_KEY_PREFIX)
}

/// Check an `ApiKey` header against the configured key.
///
/// The comparison runs in constant time. An empty configured key never
/// matches, so an unset webhook key rejects every caller.
pub fn verify_api_key(authorization: Option<&str>, expected: &str) -> Result<(), DomainError> {
    let presented = parse_api_key(authorization)?;

    if expected.is_empty() || !constant_time_eq(presented.as_bytes(), expected.as_bytes()) {
        return Err(AuthError::InvalidApiKey.into());
    }

    Ok(())
}

fn strip_scheme(authorization: Option<&str>, prefix: &str) -> Result<String, CredentialError> {
    let value = match authorization {
        Some(value) if !value.is_empty() => value,
        _ => return Err(CredentialError::MissingHeader),
    };

    value
        .strip_prefix(prefix)
        .map(str::to_string)
        .ok_or(CredentialError::MalformedHeader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bearer_returns_remainder() {
        assert_eq!(parse_bearer(Some("Bearer abc123")).unwrap(), "abc123");
    }

    #[test]
    fn test_parse_bearer_missing_header() {
        assert_eq!(parse_bearer(None), Err(CredentialError::MissingHeader));
        assert_eq!(parse_bearer(Some("")), Err(CredentialError::MissingHeader));
    }

    #[test]
    fn test_parse_bearer_wrong_scheme() {
        assert_eq!(
            parse_bearer(Some("Basic xyz")),
            Err(CredentialError::MalformedHeader)
        );
        assert_eq!(
            parse_bearer(Some("bearer abc")),
            Err(CredentialError::MalformedHeader)
        );
        assert_eq!(
            parse_bearer(Some("Bearer")),
            Err(CredentialError::MalformedHeader)
        );
    }

    #[test]
    fn test_parse_bearer_keeps_remainder_verbatim() {
        assert_eq!(parse_bearer(Some("Bearer  padded ")).unwrap(), " padded ");
        assert_eq!(parse_bearer(Some("Bearer ")).unwrap(), "");
    }

    #[test]
    fn test_parse_api_key() {
        assert_eq!(parse_api_key(Some("ApiKey f271c81ff7084ee5b99a5091b42d486e")).unwrap(), "f271c81ff7084ee5b99a5091b42d486e");
        assert_eq!(parse_api_key(None), Err(CredentialError::MissingHeader));
        assert_eq!(
            parse_api_key(Some("Bearer abc")),
            Err(CredentialError::MalformedHeader)
        );
    }

    #[test]
    fn test_verify_api_key() {
        assert!(verify_api_key(Some("ApiKey secret"), "secret").is_ok());

        let wrong = verify_api_key(Some("ApiKey other"), "secret").unwrap_err();
        assert!(matches!(wrong, DomainError::Auth(AuthError::InvalidApiKey)));

        let missing = verify_api_key(None, "secret").unwrap_err();
        assert!(matches!(
            missing,
            DomainError::Credential(CredentialError::MissingHeader)
        ));
    }

    #[test]
    fn test_empty_configured_key_rejects_everything() {
        let result = verify_api_key(Some("ApiKey "), "");
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InvalidApiKey))
        ));
    }
}
