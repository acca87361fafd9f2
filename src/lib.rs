//! # clinikit
//!
//! Clinic management core: role-based access control, session lifecycle,
//! and directory search over an in-memory clinic dataset.
//!
//! The crate is the non-visual core of a clinic dashboard. It owns:
//!
//! - **RBAC**: a fixed permission catalog (`resource:action` tokens), a
//!   static role table, and pure predicates over them
//! - **Guard**: role/permission requirements for protected views, with a
//!   fixed denial precedence (authentication, then role, then permissions)
//! - **Sessions**: login/logout against the staff directory with argon2
//!   password verification and a persisted session file
//! - **Search**: per-view list filters and a debounced global search
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use clinikit::{Clinic, ClinicConfig, Guard};
//! use clinikit::core::models::UserRole;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let clinic = Clinic::new(ClinicConfig::default()).await?;
//!
//!     clinic.sessions().login("admin@clinic.test", "clinikit-demo").await?;
//!
//!     let guard = Guard::new()
//!         .allow_roles([UserRole::Administrator, UserRole::Receptionist])
//!         .require_all(["financial:read"]);
//!     let user = clinic.sessions().current_user();
//!     assert!(guard.evaluate(clinic.rbac(), user.as_ref()).is_granted());
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod core;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{Guard, GuardDecision, RbacSystem, SessionManager, SessionStore};
pub use config::{AuthConfig, ClinicConfig, RbacConfig, StorageConfig};
pub use utils::error::{ClinicError, Result};
pub use utils::logging::init_tracing;

use std::sync::Arc;
use std::time::Duration;
use storage::{seed_demo_data, MemoryDirectory};
use tracing::info;

/// Wires config, RBAC, storage, and session management together
pub struct Clinic {
    config: ClinicConfig,
    rbac: Arc<RbacSystem>,
    directory: Arc<MemoryDirectory>,
    sessions: SessionManager,
}

impl Clinic {
    /// Create a clinic instance from configuration
    pub async fn new(config: ClinicConfig) -> Result<Self> {
        config.validate()?;
        info!("Creating clinic instance");

        let rbac = Arc::new(RbacSystem::new(&config.auth.rbac)?);

        let directory = Arc::new(MemoryDirectory::with_latency(Duration::from_millis(
            config.storage.simulated_latency_ms,
        )));
        if config.storage.seed_demo_data {
            seed_demo_data(&directory).await?;
        }

        let store = SessionStore::new(&config.auth.session_file);
        let sessions =
            SessionManager::bootstrap(rbac.clone(), directory.clone(), store).await?;

        Ok(Self {
            config,
            rbac,
            directory,
            sessions,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    /// The RBAC system
    pub fn rbac(&self) -> &RbacSystem {
        &self.rbac
    }

    /// The clinic directory
    pub fn directory(&self) -> &Arc<MemoryDirectory> {
        &self.directory
    }

    /// The session manager
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}
