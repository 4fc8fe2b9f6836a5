use area_domain::{DomainError, Service};
use async_trait::async_trait;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Service>, DomainError>;
}
