//! Mapping of domain errors onto HTTP responses.
//!
//! Every authentication failure gets the same status and body so a client
//! cannot tell which check rejected it.

use actix_web::{http::StatusCode, HttpResponse};

use chirpy_core::errors::{AuthError, DomainError, ValidationError};

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Body message for every 401 outside of login
pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized";

/// The uniform 401 response
pub fn unauthorized() -> HttpResponse {
    ErrorResponse::new(UNAUTHORIZED_MESSAGE).to_response(StatusCode::UNAUTHORIZED)
}

pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    if error.is_unauthorized() {
        tracing::debug!(reason = %error, "Request not authenticated");
        return unauthorized();
    }

    match error {
        DomainError::Validation(e) => {
            let status = match e {
                ValidationError::DuplicateEmail => StatusCode::CONFLICT,
                ValidationError::RequiredField { .. } => StatusCode::BAD_REQUEST,
            };
            ErrorResponse::new(e.to_string()).to_response(status)
        }
        other => {
            tracing::error!(error = %other, "Request failed");
            ErrorResponse::new("Something went wrong").to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Login failures keep the classic message
pub fn handle_login_error(error: DomainError) -> HttpResponse {
    if error.is_unauthorized() {
        tracing::debug!(reason = %error, "Login rejected");
        return ErrorResponse::new(AuthError::InvalidCredentials.to_string())
            .to_response(StatusCode::UNAUTHORIZED);
    }

    handle_domain_error(error)
}
