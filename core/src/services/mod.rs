//! Business services containing the authentication and session logic.

pub mod auth;
pub mod clock;
pub mod credentials;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, LoginResult};
pub use clock::{Clock, ManualClock, SystemClock};
pub use credentials::{parse_api_key, parse_bearer, verify_api_key};
pub use password::PasswordHasher;
pub use token::{RefreshTokenStore, TokenServiceConfig, TokenSigner};
