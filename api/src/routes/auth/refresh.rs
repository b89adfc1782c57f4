use actix_web::{web, HttpRequest, HttpResponse};

use chirpy_core::repositories::{CredentialRepository, RefreshTokenRepository};

use crate::dto::auth::TokenResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::authorization_header;

use super::AppState;

/// Handler for POST /api/refresh
///
/// Exchanges the refresh token in `Authorization: Bearer <token>` for a new
/// access token.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing, unknown, expired or revoked refresh token
/// - 500 Internal Server Error: storage or signing failure
pub async fn refresh<R, U>(req: HttpRequest, state: web::Data<AppState<R, U>>) -> HttpResponse
where
    R: RefreshTokenRepository + 'static,
    U: CredentialRepository + 'static,
{
    let header = match authorization_header(req.headers()) {
        Ok(header) => header,
        Err(e) => return handle_domain_error(e.into()),
    };

    match state.auth_service.refresh(header).await {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(error) => handle_domain_error(error),
    }
}
