//! Domain entities representing core business objects.

pub mod token;
pub mod user;

pub use token::{
    Claims, RefreshToken, ACCESS_TOKEN_EXPIRY_SECONDS, JWT_ISSUER, REFRESH_TOKEN_BYTES,
    REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use user::UserCredential;
