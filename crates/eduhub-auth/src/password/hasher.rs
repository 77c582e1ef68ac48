//! Argon2id password hashing.

use std::fmt;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordVerifier, SaltString};

use eduhub_core::error::{AppError, ErrorKind};

/// Hashes and checks account passwords. Output is a PHC string
/// (`$argon2id$v=19$...`) that embeds its own salt and parameters.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash with a fresh random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        password_hash::PasswordHasher::hash_password(&self.argon2, password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Could not hash password", e))
    }

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Stored password hash is malformed", e)
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Internal,
                "Could not verify password",
                e,
            )),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("algorithm", &"argon2id")
            .finish()
    }
}
