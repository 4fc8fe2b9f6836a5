pub mod catalog;
pub mod collections;
pub mod session;

pub use catalog::{CatalogStoreSnapshot, LoadCatalogUseCase};
pub use collections::{ManageActionsUseCase, ManageCollectionUseCase, ManageReactionsUseCase};
pub use session::SessionUseCase;
