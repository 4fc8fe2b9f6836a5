use area_domain::{Config, DomainError};
use area_infrastructure::{
    ApiClient, HttpActionRepository, HttpReactionRepository, HttpServiceRepository,
    HttpTemplateRepository,
};
use std::sync::Arc;

pub struct Repositories {
    pub services: Arc<HttpServiceRepository>,
    pub templates: Arc<HttpTemplateRepository>,
    pub actions: Arc<HttpActionRepository>,
    pub reactions: Arc<HttpReactionRepository>,
}

impl Repositories {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let client = ApiClient::new(&config.api)?;
        Ok(Self {
            services: Arc::new(HttpServiceRepository::new(client.clone())),
            templates: Arc::new(HttpTemplateRepository::new(client.clone())),
            actions: Arc::new(HttpActionRepository::actions(client.clone())),
            reactions: Arc::new(HttpReactionRepository::reactions(client)),
        })
    }
}
