//! User self-service operations and account administration.

use std::sync::Arc;

use tracing::info;

use eduhub_auth::password::{PasswordHasher, PasswordValidator};
use eduhub_core::error::AppError;
use eduhub_database::repositories::UserRepository;
use eduhub_entity::user::{CreateUser, User, UserRole};

use crate::auth::service::validate_email;
use crate::context::RequestContext;

/// Handles profile updates, password changes, and account creation.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

/// Partial profile update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    async fn current_user(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("User not found"))
    }

    /// Updates the current user's profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        req: UpdateProfileRequest,
    ) -> Result<User, AppError> {
        let user = self.current_user(ctx).await?;

        if let Some(name) = &req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name cannot be empty"));
            }
        }

        if let Some(email) = &req.email {
            validate_email(email)?;
            if let Some(existing) = self.user_repo.find_by_email(email).await? {
                if existing.id != user.id {
                    return Err(AppError::conflict("Email is already in use"));
                }
            }
        }

        let updated = self
            .user_repo
            .update_profile(user.id, req.name.as_deref(), req.email.as_deref())
            .await?;

        info!(user_id = %ctx.user_id, "Profile updated");

        Ok(updated)
    }

    /// Changes the current user's password.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self.current_user(ctx).await?;

        let valid = self
            .hasher
            .verify_password(current_password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Current password is incorrect"));
        }

        self.validator
            .validate_change(current_password, new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.user_repo.update_password(user.id, &new_hash).await?;

        info!(user_id = %ctx.user_id, "Password changed");

        Ok(())
    }

    /// Creates an account with an explicit role. Used by the CLI.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        validate_email(email)?;
        self.validator.validate(password)?;

        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("User with this email already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                name: name.trim().to_string(),
                email: email.to_string(),
                password_hash,
                role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// Finds a user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_email(email).await
    }

    /// Lists users, optionally filtered by role.
    pub async fn list_users(&self, role: Option<UserRole>) -> Result<Vec<User>, AppError> {
        self.user_repo.list(role).await
    }
}
