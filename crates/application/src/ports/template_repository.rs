use area_domain::{AreaTemplate, DomainError};
use async_trait::async_trait;

/// Automation templates are user-specific (connection status), so every
/// fetch needs a token.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn get_all(&self, token: &str) -> Result<Vec<AreaTemplate>, DomainError>;
}
