//! Access token payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eduhub_entity::user::{User, UserRole};

/// What an EduHub access token asserts about its bearer.
///
/// Role and email are snapshots from issuance; a later profile change does
/// not reach tokens already handed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: Uuid,
    pub email: String,
    pub role: UserRole,
    /// Unix seconds.
    pub iat: i64,
    /// Unix seconds.
    pub exp: i64,
    /// Per-token id, so two tokens minted in the same second still differ.
    pub jti: Uuid,
}

impl Claims {
    /// Claims for `user`, valid from `issued_at` until `expires_at`.
    pub fn for_user(user: &User, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
