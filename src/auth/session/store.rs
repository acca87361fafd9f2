//! Persisted session file
//!
//! The session survives restarts as a single JSON file holding the
//! serialized session user. The password hash is never serialized; on
//! restore the user record is re-resolved from the directory, so the file
//! only needs to identify the user.

use crate::core::models::User;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Reads and writes the persisted session file
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the persisted session user, if any. A corrupt file is treated
    /// as no session and removed.
    pub fn load(&self) -> Result<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<User>(&contents) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding corrupt session file");
                self.clear()?;
                Ok(None)
            }
        }
    }

    /// Persist the session user
    pub fn save(&self, user: &User) -> Result<()> {
        let contents = serde_json::to_string_pretty(user)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Remove the persisted session. Idempotent.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
