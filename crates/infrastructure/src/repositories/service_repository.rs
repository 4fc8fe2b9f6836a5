use area_application::ports::ServiceRepository;
use area_domain::{DomainError, Service, ServiceId, DEFAULT_CATEGORY};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::http::ApiClient;

const SERVICES_PATH: &str = "services";

/// Service record as the backend sends it. Everything but `id` may be missing
/// or null; missing text becomes an empty string and null tags are dropped.
#[derive(Deserialize)]
struct RawService {
    id: ServiceId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    is_popular: Option<bool>,
    #[serde(default)]
    tags: Option<Vec<Option<String>>>,
    #[serde(default)]
    automation_count: Option<u32>,
}

impl From<RawService> for Service {
    fn from(raw: RawService) -> Self {
        let category = raw
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);

        Service {
            id: raw.id,
            name: Arc::from(raw.name.unwrap_or_default().as_str()),
            description: Arc::from(raw.description.unwrap_or_default().as_str()),
            category: Arc::from(category),
            is_popular: raw.is_popular.unwrap_or(false),
            tags: raw
                .tags
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .map(|t| Arc::from(t.as_str()))
                .collect(),
            automation_count: raw.automation_count.unwrap_or(0),
        }
    }
}

pub struct HttpServiceRepository {
    client: ApiClient,
}

impl HttpServiceRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ServiceRepository for HttpServiceRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Service>, DomainError> {
        let raw: Vec<RawService> = self.client.get_list(SERVICES_PATH, None).await?;
        let services: Vec<Service> = raw.into_iter().map(Service::from).collect();

        debug!(count = services.len(), "Services fetched");
        Ok(services)
    }
}
