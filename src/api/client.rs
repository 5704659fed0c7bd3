use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::users::User;

use super::dto::{DraftPost, RemotePost};
use super::error::ApiError;
use super::BlogApi;

/// [`BlogApi`] over HTTP against a JSONPlaceholder-style backend.
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Connection {
                url: url.clone(),
                source: e,
            })?;

        decode(response, url).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response, url: String) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode { url, source: e })
}

#[async_trait]
impl BlogApi for HttpApi {
    async fn fetch_posts(&self) -> Result<Vec<RemotePost>, ApiError> {
        self.get_json("posts").await
    }

    async fn create_post(&self, draft: &DraftPost) -> Result<RemotePost, ApiError> {
        let url = self.url("posts");
        tracing::debug!(url = %url, title = %draft.title, "POST");

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Connection {
                url: url.clone(),
                source: e,
            })?;

        decode(response, url).await
    }

    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("users").await
    }
}
