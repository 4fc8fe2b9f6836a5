use area_domain::{CollectionEntity, DomainError};
use async_trait::async_trait;

/// CRUD access to a backend collection of `T`.
#[async_trait]
pub trait CollectionRepository<T: CollectionEntity>: Send + Sync {
    async fn get_all(&self, token: Option<&str>) -> Result<Vec<T>, DomainError>;

    async fn create(&self, token: &str, draft: &T::Draft) -> Result<T, DomainError>;

    async fn update(&self, token: &str, item: &T) -> Result<T, DomainError>;

    async fn delete(&self, token: &str, id: &T::Id) -> Result<(), DomainError>;
}
