//! Generic state machine for lists mirrored from a REST backend.
//!
//! Every CRUD-backed list (services, templates, actions, reactions) goes
//! through the same reducer: a fetch moves the collection to `Loading`, its
//! outcome to `Loaded` or `Error`, and mutations pass through `Mutating`
//! before the confirmed entity is folded back into the list. Failures never
//! discard the items that were already known.

use std::fmt;
use std::mem;

use crate::errors::DomainError;

/// An entity that can live in a [`RemoteCollection`].
pub trait CollectionEntity: Clone + Send + Sync + 'static {
    type Id: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Payload sent to the backend to create a new entity.
    type Draft: Send + Sync + 'static;

    fn id(&self) -> &Self::Id;

    fn validate_draft(_draft: &Self::Draft) -> Result<(), DomainError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionState<T> {
    Idle,
    Loading { stale: Vec<T> },
    Loaded(Vec<T>),
    Mutating { kind: MutationKind, items: Vec<T> },
    Error { message: String, items: Vec<T> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionEvent<T: CollectionEntity> {
    FetchStarted,
    FetchSucceeded(Vec<T>),
    FetchFailed(String),
    MutationStarted(MutationKind),
    Created(T),
    Updated(T),
    Deleted(T::Id),
    MutationFailed(String),
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCollection<T: CollectionEntity> {
    state: CollectionState<T>,
}

impl<T: CollectionEntity> Default for RemoteCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CollectionEntity> RemoteCollection<T> {
    pub fn new() -> Self {
        Self {
            state: CollectionState::Idle,
        }
    }

    pub fn state(&self) -> &CollectionState<T> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        match &self.state {
            CollectionState::Idle => &[],
            CollectionState::Loading { stale } => stale,
            CollectionState::Loaded(items)
            | CollectionState::Mutating { items, .. }
            | CollectionState::Error { items, .. } => items,
        }
    }

    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.items().iter().find(|item| item.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, CollectionState::Loading { .. })
    }

    pub fn is_mutating(&self) -> bool {
        matches!(self.state, CollectionState::Mutating { .. })
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, CollectionState::Loaded(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            CollectionState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn apply(&mut self, event: CollectionEvent<T>) {
        let previous = mem::replace(&mut self.state, CollectionState::Idle);
        self.state = Self::reduce(previous, event);
    }

    fn reduce(state: CollectionState<T>, event: CollectionEvent<T>) -> CollectionState<T> {
        match event {
            CollectionEvent::Reset => CollectionState::Idle,
            CollectionEvent::FetchStarted => CollectionState::Loading {
                stale: into_items(state),
            },
            CollectionEvent::FetchSucceeded(items) => CollectionState::Loaded(items),
            CollectionEvent::FetchFailed(message) | CollectionEvent::MutationFailed(message) => {
                CollectionState::Error {
                    message,
                    items: into_items(state),
                }
            }
            CollectionEvent::MutationStarted(kind) => CollectionState::Mutating {
                kind,
                items: into_items(state),
            },
            CollectionEvent::Created(item) => {
                let mut items = into_items(state);
                items.push(item);
                CollectionState::Loaded(items)
            }
            CollectionEvent::Updated(item) => {
                let mut items = into_items(state);
                if let Some(slot) = items.iter_mut().find(|i| i.id() == item.id()) {
                    *slot = item;
                }
                CollectionState::Loaded(items)
            }
            CollectionEvent::Deleted(id) => {
                let mut items = into_items(state);
                items.retain(|i| i.id() != &id);
                CollectionState::Loaded(items)
            }
        }
    }
}

fn into_items<T>(state: CollectionState<T>) -> Vec<T> {
    match state {
        CollectionState::Idle => Vec::new(),
        CollectionState::Loading { stale } => stale,
        CollectionState::Loaded(items)
        | CollectionState::Mutating { items, .. }
        | CollectionState::Error { items, .. } => items,
    }
}
