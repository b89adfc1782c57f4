use actix_web::{web, HttpRequest, HttpResponse};

use chirpy_core::repositories::{CredentialRepository, RefreshTokenRepository};

use crate::handlers::error::handle_domain_error;
use crate::middleware::authorization_header;

use super::AppState;

/// Handler for POST /api/revoke
///
/// Revokes the refresh token in `Authorization: Bearer <token>`. Unknown
/// and already revoked tokens still get 204.
///
/// ## Errors
/// - 401 Unauthorized: header missing or not a bearer header
/// - 500 Internal Server Error: storage failure
pub async fn revoke<R, U>(req: HttpRequest, state: web::Data<AppState<R, U>>) -> HttpResponse
where
    R: RefreshTokenRepository + 'static,
    U: CredentialRepository + 'static,
{
    let header = match authorization_header(req.headers()) {
        Ok(header) => header,
        Err(e) => return handle_domain_error(e.into()),
    };

    match state.auth_service.revoke(header).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
