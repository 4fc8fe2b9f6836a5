mod load_catalog;

pub use load_catalog::{CatalogStoreSnapshot, LoadCatalogUseCase};
