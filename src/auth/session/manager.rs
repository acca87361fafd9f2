//! Session lifecycle
//!
//! At most one authenticated user at a time. Sessions are created by
//! `login`, restored from the persisted store by `bootstrap`, and destroyed
//! by `logout`. There is no automatic login: without a valid persisted
//! session the manager starts in the explicit no-session state.

use crate::auth::rbac::RbacSystem;
use crate::core::models::{User, UserRole, UserUpdate};
use crate::storage::Directory;
use crate::utils::crypto::verify_password;
use crate::utils::error::{ClinicError, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use super::store::SessionStore;

/// Manages the current session and the login/logout lifecycle
pub struct SessionManager {
    rbac: Arc<RbacSystem>,
    directory: Arc<dyn Directory>,
    store: SessionStore,
    current: RwLock<Option<User>>,
}

impl SessionManager {
    /// Create a manager, restoring a persisted session when one exists and
    /// its user is still present and active in the directory.
    pub async fn bootstrap(
        rbac: Arc<RbacSystem>,
        directory: Arc<dyn Directory>,
        store: SessionStore,
    ) -> Result<Self> {
        let current = match store.load()? {
            Some(persisted) => match directory.find_user_by_id(persisted.id()).await? {
                Some(user) if user.is_active() => {
                    info!(user = %user.email, "restored persisted session");
                    Some(user)
                }
                _ => {
                    debug!("persisted session user is gone or inactive, clearing");
                    store.clear()?;
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            rbac,
            directory,
            store,
            current: RwLock::new(current),
        })
    }

    /// Authenticate by email and password.
    ///
    /// Every failure surfaces as the same generic credentials error; the
    /// distinct cause is only logged.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        info!(email, "login attempt");

        let user = match self.directory.find_user_by_email(email).await? {
            Some(user) => user,
            None => {
                debug!(email, "login failed: unknown email");
                return Err(ClinicError::invalid_credentials());
            }
        };

        if !verify_password(password, &user.password_hash)? {
            debug!(email, "login failed: password mismatch");
            return Err(ClinicError::invalid_credentials());
        }

        if !user.is_active() {
            debug!(email, status = ?user.status, "login failed: account not active");
            return Err(ClinicError::invalid_credentials());
        }

        let user = self.directory.record_login(user.id()).await?;
        self.store.save(&user)?;
        *self.current.write() = Some(user.clone());

        info!(email, "login succeeded");
        Ok(user)
    }

    /// End the session. Idempotent; safe to call with no session.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        if self.current.write().take().is_some() {
            info!("session ended");
        }
        Ok(())
    }

    /// Clone of the session user, if any
    pub fn current_user(&self) -> Option<User> {
        self.current.read().clone()
    }

    /// Update the session user's own record
    pub async fn update_profile(&self, update: UserUpdate) -> Result<User> {
        let id = self
            .current
            .read()
            .as_ref()
            .map(User::id)
            .ok_or_else(|| ClinicError::auth("no active session"))?;
        self.update_user(id, update).await
    }

    /// Update any user record, refreshing the session copy when the target
    /// is the session user.
    pub async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<User> {
        validate_update(&update)?;

        let updated = self.directory.update_user(id, update).await?;

        let mut current = self.current.write();
        if current.as_ref().map(User::id) == Some(id) {
            self.store.save(&updated)?;
            *current = Some(updated.clone());
        }

        Ok(updated)
    }

    /// True iff the session user holds the permission. False with no session.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.current
            .read()
            .as_ref()
            .is_some_and(|user| self.rbac.has_permission(user, permission))
    }

    /// True iff the session user has the role. False with no session.
    pub fn has_role(&self, role: UserRole) -> bool {
        self.current
            .read()
            .as_ref()
            .is_some_and(|user| user.role == role)
    }

    /// True iff the session user holds at least one listed permission.
    /// False with no session or an empty list.
    pub fn has_any_permission(&self, permissions: &[&str]) -> bool {
        self.current
            .read()
            .as_ref()
            .is_some_and(|user| self.rbac.check_any(user, permissions))
    }
}

fn validate_update(update: &UserUpdate) -> Result<()> {
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(ClinicError::validation("name must not be empty"));
        }
    }
    if let Some(email) = &update.email {
        if !email.contains('@') {
            return Err(ClinicError::validation("email address is not valid"));
        }
    }
    Ok(())
}
