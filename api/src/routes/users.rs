use actix_web::{web, HttpResponse};

use chirpy_core::repositories::{CredentialRepository, RefreshTokenRepository};

use crate::dto::user::{CreateUserRequest, UserResponse};
use crate::handlers::error::handle_domain_error;

use super::auth::AppState;

/// Handler for POST /api/users
///
/// # Request Body
///
/// ```json
/// { "email": "walt@breakingbad.com", "password": "correcthorse" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": "5f0c...",
///     "created_at": "2024-06-01T08:30:00Z",
///     "updated_at": "2024-06-01T08:30:00Z",
///     "email": "walt@breakingbad.com"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: empty email or password
/// - 409 Conflict: email already registered
/// - 500 Internal Server Error: hashing or storage failure
pub async fn create_user<R, U>(
    state: web::Data<AppState<R, U>>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse
where
    R: RefreshTokenRepository + 'static,
    U: CredentialRepository + 'static,
{
    let request = request.into_inner();

    match state.auth_service.register(&request.email, &request.password).await {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
