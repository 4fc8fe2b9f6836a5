use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::ids::ServiceId;
use crate::remote_collection::CollectionEntity;

/// Category used when the backend record carries none.
pub const DEFAULT_CATEGORY: &str = "Other";

/// A connectable third-party integration offered by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: Arc<str>,
    pub description: Arc<str>,
    pub category: Arc<str>,
    pub is_popular: bool,
    pub tags: Vec<Arc<str>>,
    pub automation_count: u32,
}

impl Service {
    pub fn new(id: ServiceId, name: &str, category: &str) -> Self {
        Self {
            id,
            name: Arc::from(name),
            description: Arc::from(""),
            category: Arc::from(category),
            is_popular: false,
            tags: Vec::new(),
            automation_count: 0,
        }
    }
}

impl CollectionEntity for Service {
    type Id = ServiceId;
    type Draft = ();

    fn id(&self) -> &ServiceId {
        &self.id
    }
}
