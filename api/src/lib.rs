//! Chirpy HTTP API
//!
//! Account creation, login, token refresh and revocation endpoints over the
//! authentication core, plus the bearer token and API key middlewares.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
