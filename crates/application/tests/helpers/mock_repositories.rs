#![allow(dead_code)]

use area_application::ports::{
    CollectionRepository, ServiceRepository, TemplateRepository, TokenProvider,
};
use area_domain::{Action, AreaTemplate, DomainError, NewAction, Service, ServiceId};
use std::sync::Arc;
use tokio::sync::RwLock;

fn mock_failure() -> DomainError {
    DomainError::Network("Mock repository failed".to_string())
}

// ── tokens ────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockTokenProvider {
    token: std::sync::RwLock<Option<String>>,
}

impl MockTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let provider = Self::new();
        provider.set_token(token.to_string());
        provider
    }
}

impl TokenProvider for MockTokenProvider {
    fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    fn set_token(&self, token: String) {
        *self.token.write().unwrap() = Some(token);
    }

    fn clear(&self) {
        *self.token.write().unwrap() = None;
    }
}

// ── services ──────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockServiceRepository {
    services: Arc<RwLock<Vec<Service>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<RwLock<u32>>,
}

impl MockServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_services(services: Vec<Service>) -> Self {
        let repo = Self::new();
        *repo.services.write().await = services;
        repo
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn calls(&self) -> u32 {
        *self.calls.read().await
    }
}

#[async_trait::async_trait]
impl ServiceRepository for MockServiceRepository {
    async fn get_all(&self) -> Result<Vec<Service>, DomainError> {
        *self.calls.write().await += 1;
        if *self.should_fail.read().await {
            return Err(mock_failure());
        }
        Ok(self.services.read().await.clone())
    }
}

// ── templates ─────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockTemplateRepository {
    templates: Arc<RwLock<Vec<AreaTemplate>>>,
    should_fail: Arc<RwLock<bool>>,
    last_token: Arc<RwLock<Option<String>>>,
}

impl MockTemplateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_templates(templates: Vec<AreaTemplate>) -> Self {
        let repo = Self::new();
        *repo.templates.write().await = templates;
        repo
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn last_token(&self) -> Option<String> {
        self.last_token.read().await.clone()
    }
}

#[async_trait::async_trait]
impl TemplateRepository for MockTemplateRepository {
    async fn get_all(&self, token: &str) -> Result<Vec<AreaTemplate>, DomainError> {
        *self.last_token.write().await = Some(token.to_string());
        if *self.should_fail.read().await {
            return Err(mock_failure());
        }
        Ok(self.templates.read().await.clone())
    }
}

// ── actions ───────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockActionRepository {
    actions: Arc<RwLock<Vec<Action>>>,
    next_id: Arc<RwLock<i64>>,
    should_fail: Arc<RwLock<bool>>,
    last_token: Arc<RwLock<Option<String>>>,
}

impl MockActionRepository {
    pub fn new() -> Self {
        Self {
            actions: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
            should_fail: Arc::new(RwLock::new(false)),
            last_token: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn seed(&self, service_id: &str, name: &str) -> Action {
        let draft = NewAction::new(ServiceId::from(service_id), name, "");
        self.insert(&draft).await
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn last_token(&self) -> Option<String> {
        self.last_token.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.actions.read().await.len()
    }

    async fn insert(&self, draft: &NewAction) -> Action {
        let mut next_id = self.next_id.write().await;
        let action = Action {
            id: *next_id,
            service_id: draft.service_id.clone(),
            name: Arc::from(draft.name.as_str()),
            description: Arc::from(draft.description.as_str()),
            created_at: None,
        };
        *next_id += 1;
        self.actions.write().await.push(action.clone());
        action
    }

    async fn check(&self, token: Option<&str>) -> Result<(), DomainError> {
        *self.last_token.write().await = token.map(str::to_string);
        if *self.should_fail.read().await {
            return Err(mock_failure());
        }
        Ok(())
    }
}

impl Default for MockActionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CollectionRepository<Action> for MockActionRepository {
    async fn get_all(&self, token: Option<&str>) -> Result<Vec<Action>, DomainError> {
        self.check(token).await?;
        Ok(self.actions.read().await.clone())
    }

    async fn create(&self, token: &str, draft: &NewAction) -> Result<Action, DomainError> {
        self.check(Some(token)).await?;
        Ok(self.insert(draft).await)
    }

    async fn update(&self, token: &str, item: &Action) -> Result<Action, DomainError> {
        self.check(Some(token)).await?;
        let mut actions = self.actions.write().await;
        let slot = actions
            .iter_mut()
            .find(|a| a.id == item.id)
            .ok_or_else(|| DomainError::NotFound(format!("action {}", item.id)))?;
        *slot = item.clone();
        Ok(item.clone())
    }

    async fn delete(&self, token: &str, id: &i64) -> Result<(), DomainError> {
        self.check(Some(token)).await?;
        let mut actions = self.actions.write().await;
        let before = actions.len();
        actions.retain(|a| a.id != *id);
        if actions.len() == before {
            return Err(DomainError::NotFound(format!("action {}", id)));
        }
        Ok(())
    }
}
