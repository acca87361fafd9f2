//! Medical records

use crate::core::models::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Medical record entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Patient the record belongs to
    pub patient_id: Uuid,
    /// Patient name, denormalized for list display and search
    pub patient_name: String,
    /// Author of the entry
    pub doctor_id: Uuid,
    /// Diagnosis summary
    pub diagnosis: String,
    /// Free-form clinical notes
    pub notes: String,
    /// Record category
    pub category: RecordCategory,
}

/// Medical record category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordCategory {
    Consultation,
    Exam,
    Prescription,
    Surgery,
    FollowUp,
}

impl MedicalRecord {
    /// Get record ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }
}
