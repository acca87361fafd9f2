//! Permission checking methods

use crate::core::models::User;

use super::system::RbacSystem;
use super::types::{Permission, PermissionCheck};

impl RbacSystem {
    /// Check if a user holds a specific permission
    pub fn has_permission(&self, user: &User, permission: &str) -> bool {
        self.permissions_for(user).contains(permission)
    }

    /// Check if a user holds every listed permission (logical AND).
    /// Vacuously true for an empty requirement list.
    pub fn check_all(&self, user: &User, required: &[&str]) -> bool {
        let granted = self.permissions_for(user);
        required.iter().all(|perm| granted.contains(*perm))
    }

    /// Check if a user holds at least one listed permission (logical OR).
    /// False for an empty requirement list: no permission can match.
    pub fn check_any(&self, user: &User, required: &[&str]) -> bool {
        let granted = self.permissions_for(user);
        required.iter().any(|perm| granted.contains(*perm))
    }

    /// Detailed permission check, naming the granting role or the denial reason
    pub fn check_detailed(&self, user: &User, required: &str) -> PermissionCheck {
        if self.has_permission(user, required) {
            PermissionCheck {
                granted: true,
                granted_by_role: Some(user.role),
                denial_reason: None,
            }
        } else {
            PermissionCheck {
                granted: false,
                granted_by_role: None,
                denial_reason: Some(format!("missing permission: {}", required)),
            }
        }
    }

    /// Check a `resource:action` pair without building the token by hand
    pub fn check_resource(&self, user: &User, resource: &str, action: &str) -> bool {
        let token = format!("{}:{}", resource, action);
        self.has_permission(user, &token)
    }

    /// Get a catalog entry by token
    pub fn get_permission(&self, name: &str) -> Option<&Permission> {
        self.permissions.get(name)
    }
}
