//! AREA Catalog Domain Layer
pub mod action;
pub mod area_template;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod ids;
pub mod reaction;
pub mod remote_collection;
pub mod service;

pub use action::{Action, NewAction};
pub use area_template::AreaTemplate;
pub use catalog::{
    CatalogSnapshot, CatalogView, DisplayItem, FilterState, PageButton, ALL_CATEGORIES,
    DEFAULT_ITEMS_PER_PAGE,
};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use ids::{ServiceId, TemplateId};
pub use reaction::{NewReaction, Reaction};
pub use remote_collection::{
    CollectionEntity, CollectionEvent, CollectionState, MutationKind, RemoteCollection,
};
pub use service::{Service, DEFAULT_CATEGORY};
