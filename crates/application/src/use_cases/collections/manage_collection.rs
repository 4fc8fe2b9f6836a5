use area_domain::{
    CollectionEntity, CollectionEvent, DomainError, MutationKind, RemoteCollection,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{CollectionRepository, TokenProvider};
use crate::services::CollectionStore;

/// CRUD driver for a backend collection.
///
/// Every call moves the shared [`CollectionStore`] through the remote
/// collection reducer. Mutations need a token; without one the collection
/// records the failure and `Unauthenticated` is returned.
pub struct ManageCollectionUseCase<T: CollectionEntity> {
    repo: Arc<dyn CollectionRepository<T>>,
    token_provider: Arc<dyn TokenProvider>,
    store: Arc<CollectionStore<T>>,
}

impl<T: CollectionEntity> ManageCollectionUseCase<T> {
    pub fn new(
        repo: Arc<dyn CollectionRepository<T>>,
        token_provider: Arc<dyn TokenProvider>,
        store: Arc<CollectionStore<T>>,
    ) -> Self {
        Self {
            repo,
            token_provider,
            store,
        }
    }

    pub fn snapshot(&self) -> RemoteCollection<T> {
        self.store.snapshot()
    }

    #[instrument(skip_all, fields(collection = self.store.label()))]
    pub async fn load(&self) -> Result<Vec<T>, DomainError> {
        self.store.apply(CollectionEvent::FetchStarted);

        let token = self.token_provider.token();
        match self.repo.get_all(token.as_deref()).await {
            Ok(items) => {
                info!(count = items.len(), "Collection loaded");
                self.store
                    .apply(CollectionEvent::FetchSucceeded(items.clone()));
                Ok(items)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load collection");
                self.store.apply(CollectionEvent::FetchFailed(e.to_string()));
                Err(e)
            }
        }
    }

    #[instrument(skip_all, fields(collection = self.store.label()))]
    pub async fn create(&self, draft: &T::Draft) -> Result<T, DomainError> {
        T::validate_draft(draft)?;
        let token = self.begin(MutationKind::Create)?;

        match self.repo.create(&token, draft).await {
            Ok(item) => {
                info!(id = %item.id(), "Entity created");
                self.store.apply(CollectionEvent::Created(item.clone()));
                Ok(item)
            }
            Err(e) => Err(self.fail(MutationKind::Create, e)),
        }
    }

    #[instrument(skip_all, fields(collection = self.store.label(), id = %item.id()))]
    pub async fn update(&self, item: &T) -> Result<T, DomainError> {
        let token = self.begin(MutationKind::Update)?;

        match self.repo.update(&token, item).await {
            Ok(updated) => {
                info!("Entity updated");
                self.store.apply(CollectionEvent::Updated(updated.clone()));
                Ok(updated)
            }
            Err(e) => Err(self.fail(MutationKind::Update, e)),
        }
    }

    #[instrument(skip_all, fields(collection = self.store.label(), id = %id))]
    pub async fn delete(&self, id: &T::Id) -> Result<(), DomainError> {
        let token = self.begin(MutationKind::Delete)?;

        match self.repo.delete(&token, id).await {
            Ok(()) => {
                info!("Entity deleted");
                self.store.apply(CollectionEvent::Deleted(id.clone()));
                Ok(())
            }
            Err(e) => Err(self.fail(MutationKind::Delete, e)),
        }
    }

    fn begin(&self, kind: MutationKind) -> Result<String, DomainError> {
        self.store.apply(CollectionEvent::MutationStarted(kind));
        self.token_provider
            .token()
            .ok_or_else(|| self.fail(kind, DomainError::Unauthenticated))
    }

    fn fail(&self, kind: MutationKind, error: DomainError) -> DomainError {
        warn!(mutation = %kind, error = %error, "Mutation failed");
        self.store
            .apply(CollectionEvent::MutationFailed(error.to_string()));
        error
    }
}
