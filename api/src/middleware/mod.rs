//! Request authentication middlewares

pub mod api_key;
pub mod auth;

pub use api_key::ApiKeyAuth;
pub use auth::{AuthContext, JwtAuth};

use actix_web::http::header::{HeaderMap, AUTHORIZATION};

use chirpy_core::errors::CredentialError;

/// Raw `Authorization` header value, if present.
///
/// A value that is not visible ASCII cannot carry either scheme and is
/// reported as `MalformedHeader`.
pub fn authorization_header(headers: &HeaderMap) -> Result<Option<&str>, CredentialError> {
    match headers.get(AUTHORIZATION) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(Some)
            .map_err(|_| CredentialError::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderValue;

    #[test]
    fn test_authorization_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(authorization_header(&headers), Ok(None));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(authorization_header(&headers), Ok(Some("Bearer abc")));

        headers.insert(AUTHORIZATION, HeaderValue::from_bytes(b"Bearer \xff").unwrap());
        assert_eq!(
            authorization_header(&headers),
            Err(CredentialError::MalformedHeader)
        );
    }
}
