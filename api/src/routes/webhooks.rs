use actix_web::{web, HttpResponse};

use crate::dto::user::WebhookEvent;

/// Handler for POST /api/polka/webhooks
///
/// Mounted behind `ApiKeyAuth`, so only callers presenting the configured
/// `ApiKey` reach it. Events are acknowledged with 204.
///
/// ## Errors
/// - 400 Bad Request: body is not a JSON event envelope
/// - 401 Unauthorized: missing or wrong API key
pub async fn polka_webhook(event: web::Json<WebhookEvent>) -> HttpResponse {
    tracing::info!(event = %event.event, "Webhook event received");
    HttpResponse::NoContent().finish()
}
