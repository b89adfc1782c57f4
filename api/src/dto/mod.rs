//! Request and response bodies

pub mod auth;
pub mod error;
pub mod user;

pub use auth::{LoginRequest, LoginResponse, TokenResponse};
pub use error::{ErrorResponse, ErrorResponseExt};
pub use user::{CreateUserRequest, UserResponse, WebhookEvent};
