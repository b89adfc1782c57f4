//! Main authentication service implementation

use std::sync::Arc;

use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::domain::entities::user::UserCredential;
use crate::errors::{AuthError, DomainError, DomainResult, PasswordError, ValidationError};
use crate::repositories::{CredentialRepository, RefreshTokenRepository};
use crate::services::clock::Clock;
use crate::services::credentials;
use crate::services::password::PasswordHasher;
use crate::services::token::{RefreshTokenStore, TokenSigner};

use super::config::AuthServiceConfig;

/// Successful login: the account plus a fresh token pair
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: UserCredential,
    pub access_token: String,
    pub refresh_token: RefreshToken,
}

/// Plaintext behind the digest that unknown-email logins are checked against
const UNKNOWN_USER_PASSWORD: &str = "chirpy-unknown-user";

/// Authentication service for the register, login, refresh and revoke flows
pub struct AuthService<R, U>
where
    R: RefreshTokenRepository,
    U: CredentialRepository,
{
    /// Credential repository for the user-account collaborator
    users: U,
    /// Refresh token lifecycle
    refresh_tokens: RefreshTokenStore<R>,
    /// Access token signer, shared with the HTTP middleware
    signer: Arc<TokenSigner>,
    hasher: PasswordHasher,
    /// Digest verified when the email is unknown, created on first use
    pub(crate) unknown_user_digest: OnceCell<String>,
    clock: Arc<dyn Clock>,
    config: AuthServiceConfig,
}

impl<R, U> AuthService<R, U>
where
    R: RefreshTokenRepository,
    U: CredentialRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `users` - Credential repository
    /// * `refresh_tokens` - Refresh token repository
    /// * `config` - Service configuration
    /// * `clock` - Time source shared by every component
    pub fn new(users: U, refresh_tokens: R, config: AuthServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let signer = Arc::new(TokenSigner::new(&config.tokens.jwt_secret, clock.clone()));

        Self {
            users,
            refresh_tokens: RefreshTokenStore::new(refresh_tokens, clock.clone()),
            signer,
            hasher: PasswordHasher::with_cost(config.bcrypt_cost),
            unknown_user_digest: OnceCell::new(),
            clock,
            config,
        }
    }

    /// The access token signer, for request authentication outside this service
    pub fn signer(&self) -> Arc<TokenSigner> {
        Arc::clone(&self.signer)
    }

    /// Create an account with a hashed password
    ///
    /// # Returns
    ///
    /// * `Ok(UserCredential)` - The stored credential
    /// * `Err(ValidationError::RequiredField)` - Empty email or password
    /// * `Err(ValidationError::DuplicateEmail)` - Email already registered
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<UserCredential> {
        let email = email.trim();
        require("email", email)?;
        require("password", password)?;

        let digest = self.hash_password(password).await?;
        let credential = UserCredential::new(email, digest, self.clock.now());

        let created = self.users.create(credential).await?;
        tracing::info!(user_id = %created.id, "User registered");
        Ok(created)
    }

    /// Log in with email and password
    ///
    /// Unknown email and wrong password are indistinguishable to the caller,
    /// and both cost one bcrypt verification.
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResult)` - Access token and persisted refresh token
    /// * `Err(AuthError::InvalidCredentials)` - Email or password rejected
    /// * `Err(DomainError)` - Storage or signing failure
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResult> {
        let Some(user) = self.users.find_by_email(email.trim()).await? else {
            if let Err(e) = self.verify_unknown_user(password).await {
                tracing::error!(error = %e, "Unknown-user password check failed");
            }
            tracing::warn!("Login failed: unknown email");
            return Err(AuthError::InvalidCredentials.into());
        };

        match self.verify_password(password, &user.password_hash).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(user_id = %user.id, "Login failed: wrong password");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(DomainError::Password(PasswordError::InvalidDigest)) => {
                tracing::error!(user_id = %user.id, "Stored password digest is not valid bcrypt");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        }

        let access_token = self.signer.issue(user.id, self.config.tokens.access_token_ttl)?;
        let refresh_token = self
            .refresh_tokens
            .issue(user.id, self.config.tokens.refresh_token_ttl)
            .await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResult {
            user,
            access_token,
            refresh_token,
        })
    }

    /// Exchange the bearer refresh token for a new access token
    pub async fn refresh(&self, authorization: Option<&str>) -> DomainResult<String> {
        let token = credentials::parse_bearer(authorization)?;
        let user_id = self.refresh_tokens.lookup(&token).await?;

        self.signer.issue(user_id, self.config.tokens.access_token_ttl)
    }

    /// Revoke the bearer refresh token
    pub async fn revoke(&self, authorization: Option<&str>) -> DomainResult<()> {
        let token = credentials::parse_bearer(authorization)?;
        self.refresh_tokens.revoke(&token).await?;

        tracing::info!("Refresh token revoked on request");
        Ok(())
    }

    /// Resolve the user behind a bearer access token
    pub fn authenticate(&self, authorization: Option<&str>) -> DomainResult<Uuid> {
        let token = credentials::parse_bearer(authorization)?;
        Ok(self.signer.validate(&token)?)
    }

    async fn verify_unknown_user(&self, password: &str) -> DomainResult<()> {
        let digest = self
            .unknown_user_digest
            .get_or_try_init(|| self.hash_password(UNKNOWN_USER_PASSWORD))
            .await?;

        self.verify_password(password, digest).await.map(|_| ())
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let hasher = self.hasher;
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
            .map_err(DomainError::from)
    }

    async fn verify_password(&self, password: &str, digest: &str) -> DomainResult<bool> {
        let hasher = self.hasher;
        let password = password.to_string();
        let digest = digest.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification task failed: {}", e),
            })?
            .map_err(DomainError::from)
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    Ok(())
}
