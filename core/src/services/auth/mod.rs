//! Authentication service module
//!
//! Wires the credential extractor, password hasher, token signer and
//! refresh token store into the register, login, refresh and revoke flows.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, LoginResult};
