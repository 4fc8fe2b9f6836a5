mod collection_repository;
mod service_repository;
mod template_repository;
mod token_provider;

pub use collection_repository::CollectionRepository;
pub use service_repository::ServiceRepository;
pub use template_repository::TemplateRepository;
pub use token_provider::TokenProvider;
