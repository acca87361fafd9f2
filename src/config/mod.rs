//! Configuration for the clinic core
//!
//! Typed configuration with serde defaults, merge semantics, and validation,
//! loadable from a YAML file.

use crate::utils::error::{ClinicError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClinicConfig {
    /// Authentication and authorization settings
    #[serde(default)]
    pub auth: AuthConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path of the persisted session file
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
    /// RBAC configuration
    #[serde(default)]
    pub rbac: RbacConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_file: default_session_file(),
            rbac: RbacConfig::default(),
        }
    }
}

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Default role for newly created users
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Roles treated as administrative
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            admin_roles: default_admin_roles(),
        }
    }
}

impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        if other.admin_roles != default_admin_roles() {
            self.admin_roles = other.admin_roles;
        }
        self
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Artificial latency in milliseconds applied to directory operations,
    /// reproducing backend round-trips in demos. Zero disables it.
    #[serde(default)]
    pub simulated_latency_ms: u64,
    /// Seed the directory with the demo dataset on startup
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 0,
            seed_demo_data: default_true(),
        }
    }
}

impl ClinicConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge configurations, preferring explicit values from `other`
    pub fn merge(mut self, other: Self) -> Self {
        if other.auth.session_file != default_session_file() {
            self.auth.session_file = other.auth.session_file;
        }
        self.auth.rbac = self.auth.rbac.merge(other.auth.rbac);
        if other.storage.simulated_latency_ms != 0 {
            self.storage.simulated_latency_ms = other.storage.simulated_latency_ms;
        }
        if !other.storage.seed_demo_data {
            self.storage.seed_demo_data = other.storage.seed_demo_data;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.session_file.as_os_str().is_empty() {
            return Err(ClinicError::config("session_file must not be empty"));
        }
        if self.auth.rbac.admin_roles.is_empty() {
            return Err(ClinicError::config(
                "rbac.admin_roles must name at least one role",
            ));
        }
        if self.auth.rbac.default_role.parse::<crate::core::models::UserRole>().is_err() {
            return Err(ClinicError::config(format!(
                "rbac.default_role '{}' is not a known role",
                self.auth.rbac.default_role
            )));
        }
        Ok(())
    }
}

fn default_session_file() -> PathBuf {
    PathBuf::from(".clinikit-session.json")
}

fn default_role() -> String {
    "viewer".to_string()
}

fn default_admin_roles() -> Vec<String> {
    vec!["administrator".to_string()]
}

fn default_true() -> bool {
    true
}
