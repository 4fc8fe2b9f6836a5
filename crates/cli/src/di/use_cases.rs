use super::Repositories;
use area_application::ports::TokenProvider;
use area_application::services::{CollectionStore, Resettable};
use area_application::use_cases::{
    LoadCatalogUseCase, ManageActionsUseCase, ManageReactionsUseCase, SessionUseCase,
};
use area_domain::{Action, AreaTemplate, Reaction, Service};
use area_infrastructure::InMemoryTokenProvider;
use std::sync::Arc;

pub struct UseCases {
    pub session: Arc<SessionUseCase>,
    pub load_catalog: Arc<LoadCatalogUseCase>,
    pub actions: Arc<ManageActionsUseCase>,
    pub reactions: Arc<ManageReactionsUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, token: Option<String>) -> Self {
        let tokens: Arc<dyn TokenProvider> = Arc::new(InMemoryTokenProvider::default());

        let services: Arc<CollectionStore<Service>> = Arc::new(CollectionStore::new("services"));
        let templates: Arc<CollectionStore<AreaTemplate>> =
            Arc::new(CollectionStore::new("templates"));
        let actions: Arc<CollectionStore<Action>> = Arc::new(CollectionStore::new("actions"));
        let reactions: Arc<CollectionStore<Reaction>> =
            Arc::new(CollectionStore::new("reactions"));

        let stores: Vec<Arc<dyn Resettable>> = vec![
            services.clone(),
            templates.clone(),
            actions.clone(),
            reactions.clone(),
        ];
        let session = Arc::new(SessionUseCase::new(tokens.clone(), stores));
        if let Some(token) = token {
            session.login(&token);
        }

        Self {
            session,
            load_catalog: Arc::new(LoadCatalogUseCase::new(
                repos.services.clone(),
                repos.templates.clone(),
                tokens.clone(),
                services,
                templates,
            )),
            actions: Arc::new(ManageActionsUseCase::new(
                repos.actions.clone(),
                tokens.clone(),
                actions,
            )),
            reactions: Arc::new(ManageReactionsUseCase::new(
                repos.reactions.clone(),
                tokens,
                reactions,
            )),
        }
    }
}
