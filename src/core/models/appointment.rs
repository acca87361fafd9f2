//! Appointment scheduling records

use crate::core::models::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scheduled appointment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Patient the appointment is for
    pub patient_id: Uuid,
    /// Patient name, denormalized for list display and search
    pub patient_name: String,
    /// Attending doctor
    pub doctor_id: Uuid,
    /// Doctor name, denormalized for list display and search
    pub doctor_name: String,
    /// Scheduled start time
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    /// Reason for the visit
    pub reason: String,
    /// Scheduling status
    pub status: AppointmentStatus,
}

/// Appointment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl Appointment {
    /// Get appointment ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Whether the appointment still occupies a slot on the calendar
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            AppointmentStatus::Scheduled | AppointmentStatus::Confirmed
        )
    }
}
