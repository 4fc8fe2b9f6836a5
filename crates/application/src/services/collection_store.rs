use area_domain::{CollectionEntity, CollectionEvent, RemoteCollection};
use std::sync::RwLock;
use tracing::debug;

/// Shared, thread-safe holder of a [`RemoteCollection`].
///
/// Use cases feed it events; readers take cloned snapshots so no lock is held
/// across an await point.
pub struct CollectionStore<T: CollectionEntity> {
    label: &'static str,
    inner: RwLock<RemoteCollection<T>>,
}

impl<T: CollectionEntity> CollectionStore<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            inner: RwLock::new(RemoteCollection::new()),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn apply(&self, event: CollectionEvent<T>) {
        let mut collection = self.inner.write().unwrap_or_else(|e| e.into_inner());
        collection.apply(event);
        debug!(
            collection = self.label,
            items = collection.items().len(),
            loading = collection.is_loading(),
            mutating = collection.is_mutating(),
            "Collection state updated"
        );
    }

    pub fn snapshot(&self) -> RemoteCollection<T> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .items()
            .to_vec()
    }

    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .error()
            .map(str::to_string)
    }
}

/// Anything whose cached state must be dropped on logout.
pub trait Resettable: Send + Sync {
    fn reset(&self);
}

impl<T: CollectionEntity> Resettable for CollectionStore<T> {
    fn reset(&self) {
        self.apply(CollectionEvent::Reset);
    }
}
