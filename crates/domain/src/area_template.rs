use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::ids::TemplateId;
use crate::remote_collection::CollectionEntity;

/// A pre-built trigger → reaction pairing offered as a ready-to-activate
/// automation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaTemplate {
    pub id: TemplateId,
    pub name: Arc<str>,
    pub description: Arc<str>,
    pub action_service: Arc<str>,
    pub reaction_service: Arc<str>,
    /// Service name → whether the current user has connected it.
    pub service_connections: HashMap<Arc<str>, bool>,
}

impl AreaTemplate {
    pub fn new(
        id: TemplateId,
        name: &str,
        action_service: &str,
        reaction_service: &str,
    ) -> Self {
        Self {
            id,
            name: Arc::from(name),
            description: Arc::from(""),
            action_service: Arc::from(action_service),
            reaction_service: Arc::from(reaction_service),
            service_connections: HashMap::new(),
        }
    }

    pub fn is_connected(&self, service_name: &str) -> bool {
        self.service_connections
            .get(service_name)
            .copied()
            .unwrap_or(false)
    }

    /// True only when both the action and the reaction service are connected.
    /// A service absent from the connection map counts as disconnected.
    pub fn can_activate(&self) -> bool {
        self.is_connected(&self.action_service) && self.is_connected(&self.reaction_service)
    }

    /// Referenced services that still need to be connected, action side first.
    pub fn missing_connections(&self) -> Vec<Arc<str>> {
        let mut missing = Vec::with_capacity(2);
        for service in [&self.action_service, &self.reaction_service] {
            if !self.is_connected(service) && !missing.contains(service) {
                missing.push(Arc::clone(service));
            }
        }
        missing
    }
}

impl CollectionEntity for AreaTemplate {
    type Id = TemplateId;
    type Draft = ();

    fn id(&self) -> &TemplateId {
        &self.id
    }
}
