//! Password policy for new passwords.
//!
//! Existing hashes are never re-checked; the policy applies at registration,
//! admin creation, and password change.

use zxcvbn::Score;

use eduhub_core::config::AuthConfig;
use eduhub_core::error::AppError;

#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
    /// Also require a zxcvbn score of at least three.
    require_strong: bool,
}

impl PasswordValidator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            require_strong: config.require_strong_passwords,
        }
    }

    /// Length is counted in characters, not bytes.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let min = self.min_length;
        if password.chars().count() < min {
            return Err(AppError::validation(format!(
                "Password must be at least {min} characters long"
            )));
        }

        if self.require_strong && zxcvbn::zxcvbn(password, &[]).score() < Score::Three {
            return Err(AppError::validation(
                "Password is too weak; try a longer passphrase",
            ));
        }

        Ok(())
    }

    /// Policy check for a replacement password, which must also differ
    /// from the current one.
    pub fn validate_change(&self, current: &str, replacement: &str) -> Result<(), AppError> {
        self.validate(replacement)?;
        if current == replacement {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }
        Ok(())
    }
}
