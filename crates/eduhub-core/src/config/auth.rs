//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest access-token lifetime accepted from configuration: one year.
pub const MAX_JWT_TTL_MINUTES: u64 = 60 * 24 * 365;

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_ttl")]
    pub jwt_ttl_minutes: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Reject passwords that score poorly on an entropy estimate.
    #[serde(default)]
    pub require_strong_passwords: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_ttl_minutes: default_ttl(),
            password_min_length: default_password_min(),
            require_strong_passwords: false,
        }
    }
}

impl AuthConfig {
    /// Rejects settings that would make token issuance fail at runtime.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=MAX_JWT_TTL_MINUTES).contains(&self.jwt_ttl_minutes) {
            return Err(AppError::configuration(format!(
                "auth.jwt_ttl_minutes must be between 1 and {MAX_JWT_TTL_MINUTES}, got {}",
                self.jwt_ttl_minutes
            )));
        }
        Ok(())
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_ttl() -> u64 {
    60
}

fn default_password_min() -> usize {
    6
}
