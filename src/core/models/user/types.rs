//! Staff user types and enums

use super::preferences::UserPreferences;
use crate::core::models::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Staff user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Full name
    pub name: String,
    /// Email address (unique within the directory)
    pub email: String,
    /// Password hash
    #[serde(skip_serializing)]
    #[serde(default)]
    pub password_hash: String,
    /// Assigned role
    pub role: UserRole,
    /// Account status
    pub status: UserStatus,
    /// Medical specialty, for doctors
    pub specialty: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Presentation preferences
    #[serde(default)]
    pub preferences: UserPreferences,
    /// Last login timestamp
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full administrative access
    Administrator,
    /// Clinical staff with record-writing access
    Doctor,
    /// Clinical support staff
    Nurse,
    /// Front-desk staff handling scheduling and billing
    Receptionist,
    /// Read-only access
    Viewer,
}

impl UserRole {
    /// All roles, in catalog order
    pub const ALL: [UserRole; 5] = [
        UserRole::Administrator,
        UserRole::Doctor,
        UserRole::Nurse,
        UserRole::Receptionist,
        UserRole::Viewer,
    ];
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Administrator => write!(f, "administrator"),
            UserRole::Doctor => write!(f, "doctor"),
            UserRole::Nurse => write!(f, "nurse"),
            UserRole::Receptionist => write!(f, "receptionist"),
            UserRole::Viewer => write!(f, "viewer"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrator" => Ok(UserRole::Administrator),
            "doctor" => Ok(UserRole::Doctor),
            "nurse" => Ok(UserRole::Nurse),
            "receptionist" => Ok(UserRole::Receptionist),
            "viewer" => Ok(UserRole::Viewer),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Active account
    Active,
    /// Deactivated account
    Inactive,
    /// Suspended account
    Suspended,
}

/// Partial user record for merge updates. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub preferences: Option<UserPreferences>,
}

impl User {
    /// Create a new user
    pub fn new(name: String, email: String, password_hash: String, role: UserRole) -> Self {
        Self {
            metadata: Metadata::new(),
            name,
            email,
            password_hash,
            role,
            status: UserStatus::Active,
            specialty: None,
            phone: None,
            preferences: UserPreferences::default(),
            last_login_at: None,
        }
    }

    /// Get user ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Check if user is active
    pub fn is_active(&self) -> bool {
        matches!(self.status, UserStatus::Active)
    }

    /// Update last login
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(chrono::Utc::now());
        self.metadata.touch();
    }

    /// Merge a partial update into this record
    pub fn apply_update(&mut self, update: UserUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(specialty) = update.specialty {
            self.specialty = Some(specialty);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(preferences) = update.preferences {
            self.preferences = preferences;
        }
        self.metadata.touch();
    }
}
