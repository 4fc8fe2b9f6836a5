use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_ITEMS_PER_PAGE;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
        }
    }
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}
