//! RBAC system core functionality

use crate::config::RbacConfig;
use crate::core::models::UserRole;
use crate::utils::error::{ClinicError, Result};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use super::types::{Permission, Role};

/// RBAC system holding the permission catalog and the static role table
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// RBAC configuration
    pub(super) config: RbacConfig,
    /// Role definitions, total over the closed role enum
    pub(super) roles: HashMap<UserRole, Role>,
    /// Permission catalog
    pub(super) permissions: HashMap<String, Permission>,
}

impl RbacSystem {
    /// Create a new RBAC system with the built-in catalog and role table
    pub fn new(config: &RbacConfig) -> Result<Self> {
        info!("Initializing RBAC system");

        let mut rbac = Self {
            config: config.clone(),
            roles: HashMap::new(),
            permissions: HashMap::new(),
        };

        rbac.initialize_catalog();
        rbac.initialize_roles();
        rbac.verify_invariants()?;

        info!(
            roles = rbac.roles.len(),
            permissions = rbac.permissions.len(),
            "RBAC system initialized"
        );
        Ok(rbac)
    }

    /// Build the fixed permission catalog
    fn initialize_catalog(&mut self) {
        debug!("Initializing permission catalog");

        let catalog = vec![
            // Patient management
            Permission::new("patients", "read", "Read patient records"),
            Permission::new("patients", "write", "Create and update patient records"),
            Permission::new("patients", "delete", "Delete patient records"),
            // Scheduling
            Permission::new("appointments", "read", "Read the appointment calendar"),
            Permission::new("appointments", "write", "Schedule and update appointments"),
            Permission::new("appointments", "delete", "Cancel and remove appointments"),
            // Medical records
            Permission::new("records", "read", "Read medical records"),
            Permission::new("records", "write", "Create and update medical records"),
            // Procedure catalog
            Permission::new("procedures", "read", "Read the procedure catalog"),
            Permission::new("procedures", "write", "Maintain the procedure catalog"),
            // Billing
            Permission::new("financial", "read", "Read invoices and billing data"),
            Permission::new("financial", "write", "Create and update invoices"),
            Permission::new("financial", "delete", "Delete invoices"),
            // Document storage
            Permission::new("documents", "read", "Read stored documents"),
            Permission::new("documents", "write", "Upload and update documents"),
            Permission::new("documents", "delete", "Delete documents"),
            // Team management
            Permission::new("team", "read", "Read staff accounts"),
            Permission::new("team", "write", "Create and update staff accounts"),
            // Clinic settings
            Permission::new("settings", "write", "Change clinic settings"),
        ];

        for permission in catalog {
            self.permissions.insert(permission.name.clone(), permission);
        }

        debug!("Initialized {} permissions", self.permissions.len());
    }

    /// Build the static role table
    fn initialize_roles(&mut self) {
        debug!("Initializing role table");

        // Administrator gets the full catalog.
        let full_catalog: HashSet<String> = self.permissions.keys().cloned().collect();

        let table = vec![
            Role {
                role: UserRole::Administrator,
                description: "Full access to every clinic resource".to_string(),
                permissions: full_catalog,
            },
            Role {
                role: UserRole::Doctor,
                description: "Clinical access: patients, records, scheduling".to_string(),
                permissions: [
                    "patients:read",
                    "patients:write",
                    "appointments:read",
                    "appointments:write",
                    "records:read",
                    "records:write",
                    "procedures:read",
                    "procedures:write",
                    "documents:read",
                    "documents:write",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
            Role {
                role: UserRole::Nurse,
                description: "Clinical support: patients and records".to_string(),
                permissions: [
                    "patients:read",
                    "patients:write",
                    "appointments:read",
                    "records:read",
                    "records:write",
                    "procedures:read",
                    "documents:read",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
            Role {
                role: UserRole::Receptionist,
                description: "Front desk: scheduling, registration, billing".to_string(),
                permissions: [
                    "patients:read",
                    "patients:write",
                    "appointments:read",
                    "appointments:write",
                    "appointments:delete",
                    "financial:read",
                    "financial:write",
                    "documents:read",
                    "documents:write",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
            Role {
                role: UserRole::Viewer,
                description: "Read-only access to non-clinical views".to_string(),
                permissions: [
                    "patients:read",
                    "appointments:read",
                    "procedures:read",
                    "documents:read",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
        ];

        for role in table {
            self.roles.insert(role.role, role);
        }

        debug!("Initialized {} roles", self.roles.len());
    }

    /// Check the role-table invariants: every role is present and non-empty,
    /// every granted token exists in the catalog, and the administrator set
    /// equals the full catalog.
    fn verify_invariants(&self) -> Result<()> {
        for role in UserRole::ALL {
            let definition = self.roles.get(&role).ok_or_else(|| {
                ClinicError::internal(format!("role table is missing '{}'", role))
            })?;
            if definition.permissions.is_empty() {
                return Err(ClinicError::internal(format!(
                    "role '{}' grants no permissions",
                    role
                )));
            }
            for token in &definition.permissions {
                if !self.permissions.contains_key(token) {
                    return Err(ClinicError::internal(format!(
                        "role '{}' grants unknown permission '{}'",
                        role, token
                    )));
                }
            }
        }

        let admin = &self.roles[&UserRole::Administrator];
        if admin.permissions.len() != self.permissions.len() {
            return Err(ClinicError::internal(
                "administrator role does not cover the full catalog",
            ));
        }

        Ok(())
    }

    /// List all roles
    pub fn list_roles(&self) -> Vec<&Role> {
        self.roles.values().collect()
    }

    /// List all permissions
    pub fn list_permissions(&self) -> Vec<&Permission> {
        self.permissions.values().collect()
    }
}
