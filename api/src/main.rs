use std::sync::Arc;

use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;

use chirpy_api::app::create_app;
use chirpy_api::routes::auth::AppState;
use chirpy_api::telemetry::init_tracing;
use chirpy_core::services::auth::{AuthService, AuthServiceConfig};
use chirpy_core::services::clock::SystemClock;
use chirpy_infra::database::{DatabasePool, MySqlCredentialRepository, MySqlRefreshTokenRepository};
use chirpy_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    init_tracing(&config.logging);

    tracing::info!(environment = %config.environment, "Starting Chirpy API server");

    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!("SECRET is not set; using the development signing secret");
    }
    if config.auth.webhook_api_key.is_empty() {
        tracing::warn!("POLKA_KEY is not set; webhook calls will be rejected");
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;

    let auth_service = AuthService::new(
        MySqlCredentialRepository::new(pool.get_pool().clone()),
        MySqlRefreshTokenRepository::new(pool.get_pool().clone()),
        AuthServiceConfig::from(&config.auth),
        Arc::new(SystemClock),
    );
    let app_state = web::Data::new(
        AppState::new(Arc::new(auth_service))
            .with_webhook_api_key(config.auth.webhook_api_key.as_str()),
    );

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Listening");

    HttpServer::new(move || create_app(app_state.clone()).wrap(Logger::default()))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}
