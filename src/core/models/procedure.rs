//! Clinical procedure catalog

use crate::core::models::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Billable clinical procedure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Procedure {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Procedure name
    pub name: String,
    /// Billing code
    pub code: String,
    /// Category label used by the list filter
    pub category: String,
    /// Price in cents
    pub price_cents: i64,
}

impl Procedure {
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }
}
