use area_domain::config::ApiConfig;
use area_domain::DomainError;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::listing::parse_listing;

/// Thin JSON client over the AREA REST API.
///
/// Network calls are made once; there is no retry layer.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: Arc::from(config.base_url.trim_end_matches('/')),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<R, DomainError> {
        let url = self.url(path);
        let response = self.send(self.http.get(&url), token, &url).await?;
        read_json(response, &url).await
    }

    /// GET a list endpoint, accepting a bare array or a `data` envelope.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<Vec<T>, DomainError> {
        let url = self.url(path);
        let response = self.send(self.http.get(&url), token, &url).await?;
        let body = read_body(response, &url).await?;
        parse_listing(&body).map_err(|e| malformed(e, &url))
    }

    pub async fn post_json<B, R>(&self, path: &str, token: &str, body: &B) -> Result<R, DomainError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self
            .send(self.http.post(&url).json(body), Some(token), &url)
            .await?;
        read_json(response, &url).await
    }

    pub async fn put_json<B, R>(&self, path: &str, token: &str, body: &B) -> Result<R, DomainError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self
            .send(self.http.put(&url).json(body), Some(token), &url)
            .await?;
        read_json(response, &url).await
    }

    pub async fn delete(&self, path: &str, token: &str) -> Result<(), DomainError> {
        let url = self.url(path);
        self.send(self.http.delete(&url), Some(token), &url).await?;
        Ok(())
    }

    async fn send(
        &self,
        request: RequestBuilder,
        token: Option<&str>,
        url: &str,
    ) -> Result<Response, DomainError> {
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Request failed");
            DomainError::Network(format!("fetch error for {}: {}", url, e))
        })?;

        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "Response received");

        match status {
            s if s.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(DomainError::Unauthenticated),
            StatusCode::NOT_FOUND => Err(DomainError::NotFound(url.to_string())),
            s => Err(DomainError::HttpStatus {
                status: s.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}

async fn read_json<R: DeserializeOwned>(response: Response, url: &str) -> Result<R, DomainError> {
    let body = read_body(response, url).await?;
    serde_json::from_str(&body).map_err(|e| malformed(e, url))
}

async fn read_body(response: Response, url: &str) -> Result<String, DomainError> {
    response
        .text()
        .await
        .map_err(|e| DomainError::Network(format!("read error for {}: {}", url, e)))
}

fn malformed(error: serde_json::Error, url: &str) -> DomainError {
    DomainError::MalformedResponse(format!("{} ({})", error, url))
}
