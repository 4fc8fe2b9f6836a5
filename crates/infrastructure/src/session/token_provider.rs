use area_application::ports::TokenProvider;
use std::sync::RwLock;

/// Process-local token holder, seeded from the command line or environment.
#[derive(Default)]
pub struct InMemoryTokenProvider {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token.filter(|t| !t.trim().is_empty())),
        }
    }
}

impl TokenProvider for InMemoryTokenProvider {
    fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_token(&self, token: String) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token);
    }

    fn clear(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
