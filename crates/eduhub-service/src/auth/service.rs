//! Account registration, credential login, and profile lookup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::ValidateEmail;

use eduhub_auth::jwt::{IssuedToken, JwtEncoder};
use eduhub_auth::password::{PasswordHasher, PasswordValidator};
use eduhub_core::error::AppError;
use eduhub_database::repositories::UserRepository;
use eduhub_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Message for any failed credential check. Unknown email and wrong
/// password must be indistinguishable.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Registration input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A signed token together with the user it was issued to.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: IssuedToken,
    pub user: User,
}

/// Handles registration, login, and profile retrieval.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new account with role `user` and logs it in.
    pub async fn register(&self, req: RegisterRequest) -> Result<LoginResult, AppError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        validate_email(&req.email)?;
        self.validator.validate(&req.password)?;

        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("User with this email already exists"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                name: name.to_string(),
                email: req.email,
                password_hash,
                role: UserRole::User,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "User registered");

        let token = self.encoder.issue(&user)?;
        Ok(LoginResult { token, user })
    }

    /// Verifies credentials and issues an access token.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResult, AppError> {
        let Some(user) = self.user_repo.find_by_email(&req.email).await? else {
            warn!(email = %req.email, "Login failed: unknown email");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self
            .hasher
            .verify_password(&req.password, &user.password_hash)?
        {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let token = self.encoder.issue(&user)?;
        info!(user_id = %user.id, "User logged in");

        Ok(LoginResult { token, user })
    }

    /// Returns the caller's user record.
    ///
    /// A valid token whose user no longer exists is an authentication
    /// failure, not a missing resource.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("User not found"))
    }
}

/// Reject obviously malformed email addresses.
pub(crate) fn validate_email(email: &str) -> Result<(), AppError> {
    if email.trim().validate_email() {
        Ok(())
    } else {
        Err(AppError::validation("A valid email address is required"))
    }
}
