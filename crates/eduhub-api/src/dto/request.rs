//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Email.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Password. Length policy is enforced by the service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[serde(alias = "currentPassword")]
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[serde(alias = "newPassword")]
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name cannot be empty"))]
    pub name: Option<String>,
    /// Email.
    #[validate(email(message = "A valid email address is required"))]
    pub email: Option<String>,
}
