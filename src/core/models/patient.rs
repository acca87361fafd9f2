//! Patient records

use crate::core::models::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Patient record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// National document number shown in list views
    pub document_number: Option<String>,
    /// Date of birth
    pub birth_date: Option<chrono::NaiveDate>,
    /// Insurance plan name
    pub insurance: Option<String>,
    /// Registration status
    pub status: PatientStatus,
}

/// Patient registration status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatientStatus {
    Active,
    Inactive,
}

impl Patient {
    /// Create a new active patient
    pub fn new(name: String) -> Self {
        Self {
            metadata: Metadata::new(),
            name,
            email: None,
            phone: None,
            document_number: None,
            birth_date: None,
            insurance: None,
            status: PatientStatus::Active,
        }
    }

    /// Get patient ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }
}
