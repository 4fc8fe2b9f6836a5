use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::DomainError;
use crate::ids::ServiceId;
use crate::remote_collection::CollectionEntity;

/// Trigger-side capability of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: i64,
    pub service_id: ServiceId,
    pub name: Arc<str>,
    #[serde(default = "empty_text")]
    pub description: Arc<str>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for creating an [`Action`]; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAction {
    pub service_id: ServiceId,
    pub name: String,
    pub description: String,
}

impl NewAction {
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

impl CollectionEntity for Action {
    type Id = i64;
    type Draft = NewAction;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn validate_draft(draft: &Self::Draft) -> Result<(), DomainError> {
        draft.validate().map_err(DomainError::InvalidAction)
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 100 {
        return Err("Name cannot exceed 100 characters".to_string());
    }
    Ok(())
}

pub(crate) fn validate_description(description: &str) -> Result<(), String> {
    if description.len() > 500 {
        return Err("Description cannot exceed 500 characters".to_string());
    }
    Ok(())
}

pub(crate) fn empty_text() -> Arc<str> {
    Arc::from("")
}
