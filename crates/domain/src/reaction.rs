use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::action::{empty_text, validate_description, validate_name};
use crate::errors::DomainError;
use crate::ids::ServiceId;
use crate::remote_collection::CollectionEntity;

/// Response-side capability of a service, executed when a connected action fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: i64,
    pub service_id: ServiceId,
    pub name: Arc<str>,
    #[serde(default = "empty_text")]
    pub description: Arc<str>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReaction {
    pub service_id: ServiceId,
    pub name: String,
    pub description: String,
}

impl NewReaction {
    pub fn new(service_id: ServiceId, name: &str, description: &str) -> Self {
        Self {
            service_id,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_description(&self.description)
    }
}

impl CollectionEntity for Reaction {
    type Id = i64;
    type Draft = NewReaction;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn validate_draft(draft: &Self::Draft) -> Result<(), DomainError> {
        draft.validate().map_err(DomainError::InvalidReaction)
    }
}
