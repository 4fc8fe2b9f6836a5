use area_domain::{
    AreaTemplate, CatalogView, CollectionEntity, CollectionEvent, DomainError, Service,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{ServiceRepository, TemplateRepository, TokenProvider};
use crate::services::CollectionStore;

/// Store contents after a catalog load, one entry per collection.
#[derive(Debug, Clone, Default)]
pub struct CatalogStoreSnapshot {
    pub services: Vec<Service>,
    pub templates: Vec<AreaTemplate>,
    pub services_error: Option<String>,
    pub templates_error: Option<String>,
}

impl CatalogStoreSnapshot {
    pub fn has_errors(&self) -> bool {
        self.services_error.is_some() || self.templates_error.is_some()
    }

    pub fn into_view(self, items_per_page: usize) -> CatalogView {
        CatalogView::new(self.services, self.templates, items_per_page)
    }
}

pub struct LoadCatalogUseCase {
    service_repo: Arc<dyn ServiceRepository>,
    template_repo: Arc<dyn TemplateRepository>,
    token_provider: Arc<dyn TokenProvider>,
    services: Arc<CollectionStore<Service>>,
    templates: Arc<CollectionStore<AreaTemplate>>,
}

impl LoadCatalogUseCase {
    pub fn new(
        service_repo: Arc<dyn ServiceRepository>,
        template_repo: Arc<dyn TemplateRepository>,
        token_provider: Arc<dyn TokenProvider>,
        services: Arc<CollectionStore<Service>>,
        templates: Arc<CollectionStore<AreaTemplate>>,
    ) -> Self {
        Self {
            service_repo,
            template_repo,
            token_provider,
            services,
            templates,
        }
    }

    /// Fetches services and templates concurrently. Each collection records
    /// its own outcome; a failure on one side never blocks the other.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> CatalogStoreSnapshot {
        tokio::join!(self.load_services(), self.load_templates());

        let snapshot = CatalogStoreSnapshot {
            services: self.services.items(),
            templates: self.templates.items(),
            services_error: self.services.error(),
            templates_error: self.templates.error(),
        };

        info!(
            services = snapshot.services.len(),
            templates = snapshot.templates.len(),
            has_errors = snapshot.has_errors(),
            "Catalog loaded"
        );

        snapshot
    }

    async fn load_services(&self) {
        self.services.apply(CollectionEvent::FetchStarted);
        let result = self.service_repo.get_all().await;
        record_fetch(&self.services, result);
    }

    async fn load_templates(&self) {
        let Some(token) = self.token_provider.token() else {
            self.templates
                .apply(CollectionEvent::FetchSucceeded(Vec::new()));
            return;
        };

        self.templates.apply(CollectionEvent::FetchStarted);
        let result = self.template_repo.get_all(&token).await;
        record_fetch(&self.templates, result);
    }
}

fn record_fetch<T: CollectionEntity>(
    store: &CollectionStore<T>,
    result: Result<Vec<T>, DomainError>,
) {
    match result {
        Ok(items) => store.apply(CollectionEvent::FetchSucceeded(items)),
        Err(e) => {
            warn!(collection = store.label(), error = %e, "Failed to fetch collection");
            store.apply(CollectionEvent::FetchFailed(e.to_string()));
        }
    }
}
