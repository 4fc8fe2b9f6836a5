use area_application::ports::TemplateRepository;
use area_domain::{AreaTemplate, DomainError, TemplateId};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::http::ApiClient;

const TEMPLATES_PATH: &str = "areas/templates";

/// Template record as the backend sends it. A `can_activate` flag may be
/// present but is ignored; it is derived from the connection map. Missing
/// text fields become empty strings.
#[derive(Deserialize)]
struct RawTemplate {
    id: TemplateId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    action_service: Option<String>,
    #[serde(default)]
    reaction_service: Option<String>,
    #[serde(default)]
    service_connections: Option<HashMap<String, bool>>,
}

impl From<RawTemplate> for AreaTemplate {
    fn from(raw: RawTemplate) -> Self {
        AreaTemplate {
            id: raw.id,
            name: Arc::from(raw.name.unwrap_or_default().as_str()),
            description: Arc::from(raw.description.unwrap_or_default().as_str()),
            action_service: Arc::from(raw.action_service.unwrap_or_default().as_str()),
            reaction_service: Arc::from(raw.reaction_service.unwrap_or_default().as_str()),
            service_connections: raw
                .service_connections
                .unwrap_or_default()
                .into_iter()
                .map(|(name, connected)| (Arc::from(name.as_str()), connected))
                .collect(),
        }
    }
}

pub struct HttpTemplateRepository {
    client: ApiClient,
}

impl HttpTemplateRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TemplateRepository for HttpTemplateRepository {
    #[instrument(skip(self, token))]
    async fn get_all(&self, token: &str) -> Result<Vec<AreaTemplate>, DomainError> {
        let raw: Vec<RawTemplate> = self.client.get_list(TEMPLATES_PATH, Some(token)).await?;
        let templates: Vec<AreaTemplate> = raw.into_iter().map(AreaTemplate::from).collect();

        debug!(count = templates.len(), "Templates fetched");
        Ok(templates)
    }
}
