//! Stored document references

use crate::core::models::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to a stored document (the bytes live outside this crate)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Patient the document belongs to, if any
    pub patient_id: Option<Uuid>,
    /// File name
    pub name: String,
    /// MIME type
    pub mime_type: String,
    /// Size in bytes
    pub size_bytes: u64,
}

impl Document {
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }
}
