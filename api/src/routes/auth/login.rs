use actix_web::{web, HttpResponse};

use chirpy_core::repositories::{CredentialRepository, RefreshTokenRepository};

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_login_error;

use super::AppState;

/// Handler for POST /api/login
///
/// # Request Body
///
/// ```json
/// { "email": "walt@breakingbad.com", "password": "correcthorse" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "id": "5f0c...",
///     "created_at": "2024-06-01T08:30:00Z",
///     "updated_at": "2024-06-01T08:30:00Z",
///     "email": "walt@breakingbad.com",
///     "token": "eyJ...",
///     "refresh_token": "56aa826d22baab4b5ec2cea41a59ecbba03e542aedbb31d9b80326ac8ffcfa2a"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: `{"error": "Incorrect email or password"}`
/// - 500 Internal Server Error: storage or signing failure
pub async fn login<R, U>(
    state: web::Data<AppState<R, U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: RefreshTokenRepository + 'static,
    U: CredentialRepository + 'static,
{
    let request = request.into_inner();

    match state.auth_service.login(&request.email, &request.password).await {
        Ok(result) => HttpResponse::Ok().json(LoginResponse::from(result)),
        Err(error) => handle_login_error(error),
    }
}
