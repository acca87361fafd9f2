//! RBAC type definitions

use crate::core::models::UserRole;
use std::collections::HashSet;

/// Role definition
#[derive(Debug, Clone)]
pub struct Role {
    /// The role this definition is for
    pub role: UserRole,
    /// Role description
    pub description: String,
    /// Permission tokens granted by this role
    pub permissions: HashSet<String>,
}

/// Permission catalog entry
#[derive(Debug, Clone)]
pub struct Permission {
    /// Permission token (`resource:action`)
    pub name: String,
    /// Permission description
    pub description: String,
    /// Resource this permission applies to
    pub resource: String,
    /// Action this permission allows
    pub action: String,
}

impl Permission {
    /// Build a catalog entry from its resource and action parts
    pub fn new(resource: &str, action: &str, description: &str) -> Self {
        Self {
            name: format!("{}:{}", resource, action),
            description: description.to_string(),
            resource: resource.to_string(),
            action: action.to_string(),
        }
    }
}

/// Detailed permission check result
#[derive(Debug, Clone)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role that granted the permission
    pub granted_by_role: Option<UserRole>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
