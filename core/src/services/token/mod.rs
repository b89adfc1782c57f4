//! Token services
//!
//! - `TokenSigner` issues and validates HS256 access tokens
//! - `RefreshTokenStore` generates opaque refresh tokens and manages
//!   their persisted lifecycle

mod config;
mod refresh;
mod signer;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use refresh::RefreshTokenStore;
pub use signer::TokenSigner;
