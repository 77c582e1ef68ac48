//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use eduhub_core::config::AuthConfig;
use eduhub_core::error::AppError;
use eduhub_entity::user::User;

use super::claims::Claims;

/// Creates signed HS256 access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// `None` when the configured minutes do not fit a `TimeDelta`.
    ttl: Option<TimeDelta>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// A freshly signed access token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The compact JWS string.
    pub access_token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: i64::try_from(config.jwt_ttl_minutes)
                .ok()
                .and_then(TimeDelta::try_minutes),
        }
    }

    /// Issues an access token for the given user.
    pub fn issue(&self, user: &User) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = self
            .ttl
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AppError::configuration("Access token lifetime is out of range"))?;
        let claims = Claims::for_user(user, now, expires_at);

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }
}
