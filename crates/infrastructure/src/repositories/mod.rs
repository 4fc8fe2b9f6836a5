mod collection_repository;
mod service_repository;
mod template_repository;

pub use collection_repository::{
    HttpActionRepository, HttpCollectionRepository, HttpReactionRepository,
};
pub use service_repository::HttpServiceRepository;
pub use template_repository::HttpTemplateRepository;
