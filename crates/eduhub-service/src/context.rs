//! The authenticated caller, as seen by services.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eduhub_entity::user::UserRole;

/// Who is making the current request. Built from verified token claims by
/// the HTTP layer, or directly by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    pub user_id: Uuid,
    /// Role recorded in the token.
    pub role: UserRole,
    pub email: String,
}

impl RequestContext {
    pub fn new(user_id: Uuid, role: UserRole, email: String) -> Self {
        Self {
            user_id,
            role,
            email,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
