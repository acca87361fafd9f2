//! Role lookup methods

use crate::core::models::{User, UserRole};
use std::collections::HashSet;

use super::system::RbacSystem;
use super::types::Role;

impl RbacSystem {
    /// Get a role definition. Total over the closed role enum.
    pub fn role(&self, role: UserRole) -> &Role {
        // Presence of every role is checked at construction.
        &self.roles[&role]
    }

    /// Permission tokens granted to a role
    pub fn role_permissions(&self, role: UserRole) -> &HashSet<String> {
        &self.role(role).permissions
    }

    /// Permissions for a user, recomputed from the role table on every call.
    /// Nothing is denormalized onto the user record, so the role table is
    /// always authoritative.
    pub fn permissions_for(&self, user: &User) -> &HashSet<String> {
        self.role_permissions(user.role)
    }

    /// Check if the user's role is configured as administrative
    pub fn is_admin(&self, user: &User) -> bool {
        self.config.admin_roles.contains(&user.role.to_string())
    }
}
