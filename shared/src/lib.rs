//! Shared configuration for the Chirpy server
//!
//! This crate provides the configuration types used across all server modules:
//! - Authentication (JWT secret, token lifetimes, webhook key, bcrypt cost)
//! - Database connection settings
//! - HTTP server bind address
//! - Environment detection and logging

pub mod config;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    ServerConfig,
};
