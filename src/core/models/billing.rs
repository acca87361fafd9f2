//! Billing records

use crate::core::models::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Patient invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Patient billed
    pub patient_id: Uuid,
    /// Patient name, denormalized for list display and search
    pub patient_name: String,
    /// Line description
    pub description: String,
    /// Amount in cents
    pub amount_cents: i64,
    /// Due date
    pub due_date: chrono::NaiveDate,
    /// Payment status
    pub status: InvoiceStatus,
}

/// Invoice payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl Invoice {
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }
}
