//! Role and ownership checks for content operations.

use uuid::Uuid;

use eduhub_core::error::AppError;
use eduhub_entity::user::UserRole;

/// Enforces admin-only and owner-or-admin access rules.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Requires the role to be admin.
    pub fn require_admin(&self, role: &UserRole) -> Result<(), AppError> {
        if role.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' is insufficient; admin required"
            )))
        }
    }

    /// Requires the actor to own the resource or to be an admin.
    pub fn require_owner_or_admin(
        &self,
        actor_id: Uuid,
        actor_role: &UserRole,
        owner_id: Uuid,
    ) -> Result<(), AppError> {
        if actor_id == owner_id || actor_role.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization(
                "You do not have permission to access this content",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_or_admin() {
        let rbac = RbacEnforcer::new();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        assert!(rbac.require_owner_or_admin(owner, &UserRole::User, owner).is_ok());
        assert!(rbac.require_owner_or_admin(other, &UserRole::Admin, owner).is_ok());
        assert!(rbac.require_owner_or_admin(other, &UserRole::User, owner).is_err());
    }

    #[test]
    fn test_require_admin() {
        let rbac = RbacEnforcer::new();
        assert!(rbac.require_admin(&UserRole::Admin).is_ok());
        assert!(rbac.require_admin(&UserRole::User).is_err());
    }
}
