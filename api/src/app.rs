//! Application factory
//!
//! Builds the actix-web `App` with shared state, JSON error handling and
//! the `/api` routes. Access logging is layered on by the server.

use std::sync::Arc;

use actix_web::{error::InternalError, http::StatusCode, web, App, HttpResponse};

use chirpy_core::repositories::{CredentialRepository, RefreshTokenRepository};

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::middleware::ApiKeyAuth;
use crate::routes::auth::{login, refresh, revoke, AppState};
use crate::routes::health::healthz;
use crate::routes::users::create_user;
use crate::routes::webhooks::polka_webhook;

/// Create and configure the application with all dependencies
pub fn create_app<R, U>(
    app_state: web::Data<AppState<R, U>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: RefreshTokenRepository + 'static,
    U: CredentialRepository + 'static,
{
    let webhook_api_key = Arc::clone(&app_state.webhook_api_key);

    App::new()
        .app_data(app_state)
        .app_data(json_config())
        .service(
            web::scope("/api")
                .route("/healthz", web::get().to(healthz))
                .route("/users", web::post().to(create_user::<R, U>))
                .route("/login", web::post().to(login::<R, U>))
                .route("/refresh", web::post().to(refresh::<R, U>))
                .route("/revoke", web::post().to(revoke::<R, U>))
                .service(
                    web::scope("/polka")
                        .wrap(ApiKeyAuth::new(webhook_api_key))
                        .route("/webhooks", web::post().to(polka_webhook)),
                ),
        )
        .default_service(web::route().to(|| async {
            ErrorResponse::new("not found").to_response(StatusCode::NOT_FOUND)
        }))
}

/// Malformed JSON bodies get the standard error body instead of plain text
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response: HttpResponse =
            ErrorResponse::new(format!("Invalid JSON: {}", err)).to_response(StatusCode::BAD_REQUEST);
        InternalError::from_response(err, response).into()
    })
}
