//! Remote blog resource: wire types, errors and the HTTP client.

mod client;
mod dto;
mod error;

use async_trait::async_trait;

use crate::users::User;

pub use client::HttpApi;
pub use dto::{DraftPost, LooseId, RemotePost};
pub use error::ApiError;

/// The remote post and user resources.
///
/// Thunks only talk to the backend through this trait, so the store can be
/// driven by [`HttpApi`] or by an in-memory fake.
#[async_trait]
pub trait BlogApi: Send + Sync {
    /// `GET /posts`
    async fn fetch_posts(&self) -> Result<Vec<RemotePost>, ApiError>;

    /// `POST /posts`, returning the record as echoed by the backend.
    async fn create_post(&self, draft: &DraftPost) -> Result<RemotePost, ApiError>;

    /// `GET /users`
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError>;
}
