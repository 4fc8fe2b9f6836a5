//! AREA Catalog Infrastructure Layer
pub mod http;
pub mod repositories;
pub mod session;

pub use http::ApiClient;
pub use repositories::{
    HttpActionRepository, HttpCollectionRepository, HttpReactionRepository,
    HttpServiceRepository, HttpTemplateRepository,
};
pub use session::InMemoryTokenProvider;
