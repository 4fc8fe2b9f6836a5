use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::TokenProvider;
use crate::services::Resettable;

/// Login and logout. Logging out clears the token and drops every cached
/// collection so no user data survives the session.
pub struct SessionUseCase {
    token_provider: Arc<dyn TokenProvider>,
    stores: Vec<Arc<dyn Resettable>>,
}

impl SessionUseCase {
    pub fn new(token_provider: Arc<dyn TokenProvider>, stores: Vec<Arc<dyn Resettable>>) -> Self {
        Self {
            token_provider,
            stores,
        }
    }

    #[instrument(skip_all)]
    pub fn login(&self, token: &str) {
        let token = token.trim();
        if token.is_empty() {
            self.logout();
            return;
        }
        self.token_provider.set_token(token.to_string());
        info!("Session started");
    }

    #[instrument(skip_all)]
    pub fn logout(&self) {
        self.token_provider.clear();
        for store in &self.stores {
            store.reset();
        }
        info!(stores = self.stores.len(), "Session cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.token_provider.is_authenticated()
    }
}
