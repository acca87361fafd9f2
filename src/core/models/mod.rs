//! Core data models for the clinic
//!
//! This module defines the data structures backing the directory: staff
//! users, patients, appointments, medical records, procedures, invoices,
//! and stored documents.

pub mod appointment;
pub mod billing;
pub mod document;
pub mod patient;
pub mod procedure;
pub mod record;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus};
pub use billing::{Invoice, InvoiceStatus};
pub use document::Document;
pub use patient::{Patient, PatientStatus};
pub use procedure::Procedure;
pub use record::{MedicalRecord, RecordCategory};
pub use user::{User, UserPreferences, UserRole, UserStatus, UserUpdate};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common metadata for all models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Unique identifier
    pub id: Uuid,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Version, incremented on every update
    pub version: i64,
}

impl Default for Metadata {
    fn default() -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }
}

impl Metadata {
    /// Create new metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the timestamp and increment version
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
        self.version += 1;
    }
}
