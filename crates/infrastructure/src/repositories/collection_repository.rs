use area_application::ports::CollectionRepository;
use area_domain::{Action, CollectionEntity, DomainError, Reaction};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::instrument;

use crate::http::ApiClient;

/// REST collection at `{base}/{path}`: list, create, `PUT {path}/{id}` and
/// `DELETE {path}/{id}`.
pub struct HttpCollectionRepository<T> {
    client: ApiClient,
    path: &'static str,
    _entity: PhantomData<fn() -> T>,
}

pub type HttpActionRepository = HttpCollectionRepository<Action>;
pub type HttpReactionRepository = HttpCollectionRepository<Reaction>;

impl<T> HttpCollectionRepository<T> {
    pub fn new(client: ApiClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    fn item_path(&self, id: impl std::fmt::Display) -> String {
        format!("{}/{}", self.path, id)
    }
}

impl HttpActionRepository {
    pub fn actions(client: ApiClient) -> Self {
        Self::new(client, "actions")
    }
}

impl HttpReactionRepository {
    pub fn reactions(client: ApiClient) -> Self {
        Self::new(client, "reactions")
    }
}

#[async_trait]
impl<T> CollectionRepository<T> for HttpCollectionRepository<T>
where
    T: CollectionEntity + Serialize + DeserializeOwned,
    T::Draft: Serialize,
{
    #[instrument(skip(self, token), fields(path = self.path))]
    async fn get_all(&self, token: Option<&str>) -> Result<Vec<T>, DomainError> {
        self.client.get_list(self.path, token).await
    }

    #[instrument(skip_all, fields(path = self.path))]
    async fn create(&self, token: &str, draft: &T::Draft) -> Result<T, DomainError> {
        self.client.post_json(self.path, token, draft).await
    }

    #[instrument(skip_all, fields(path = self.path, id = %item.id()))]
    async fn update(&self, token: &str, item: &T) -> Result<T, DomainError> {
        self.client
            .put_json(&self.item_path(item.id()), token, item)
            .await
    }

    #[instrument(skip_all, fields(path = self.path, id = %id))]
    async fn delete(&self, token: &str, id: &T::Id) -> Result<(), DomainError> {
        self.client.delete(&self.item_path(id), token).await
    }
}
