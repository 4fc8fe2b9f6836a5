mod manage_collection;

pub use manage_collection::ManageCollectionUseCase;

use area_domain::{Action, Reaction};

pub type ManageActionsUseCase = ManageCollectionUseCase<Action>;
pub type ManageReactionsUseCase = ManageCollectionUseCase<Reaction>;
