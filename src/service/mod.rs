// src/service/mod.rs

mod mock;

pub use mock::{default_definition, MockFieldService};

use async_trait::async_trait;
use serde_json::Value;

use crate::field::{FieldDefinition, SaveRequest};

/// Result of a save. Network problems are values here, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// 2xx from the endpoint; the body if it was JSON, else `Null`
    Saved { response: Value },
    /// Non-2xx status
    Rejected { status: u16 },
    /// The request never got a response
    Failed { reason: String },
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }

    pub fn describe(&self) -> String {
        match self {
            SaveOutcome::Saved { .. } => "Changes saved.".to_string(),
            SaveOutcome::Rejected { status } => format!("Save rejected: server responded with status {}", status),
            SaveOutcome::Failed { reason } => format!("Save failed: {}", reason),
        }
    }
}

#[async_trait]
pub trait FieldService: Send + Sync {
    /// Fetch the field definition to edit. `id` is accepted for future lookups.
    fn get_field(&self, id: Option<&str>) -> FieldDefinition;

    async fn save(&self, request: &SaveRequest) -> SaveOutcome;
}
