//! In-memory `BlogApi` with scripted responses.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use postboard::api::{ApiError, BlogApi, DraftPost, LooseId, RemotePost};
use postboard::users::User;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Scripted outcome of a call: a payload or an HTTP status to fail with.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Status(u16),
}

impl<T: Clone> Reply<T> {
    fn resolve(&self, path: &str) -> Result<T, ApiError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Status(status) => Err(ApiError::Status {
                status: *status,
                url: format!("http://fake{path}"),
            }),
        }
    }
}

pub struct FakeApi {
    posts: Mutex<Reply<Vec<RemotePost>>>,
    users: Mutex<Reply<Vec<User>>>,
    create: Mutex<Option<Reply<RemotePost>>>,
    drafts: Mutex<Vec<DraftPost>>,
    posts_calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Reply::Ok(Vec::new())),
            users: Mutex::new(Reply::Ok(Vec::new())),
            create: Mutex::new(None),
            drafts: Mutex::new(Vec::new()),
            posts_calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Make `fetch_posts` wait until [`FakeApi::release`] is called.
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::new()
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn with_posts(self, posts: Vec<RemotePost>) -> Self {
        *self.posts.lock() = Reply::Ok(posts);
        self
    }

    pub fn failing_posts(self, status: u16) -> Self {
        *self.posts.lock() = Reply::Status(status);
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock() = Reply::Ok(users);
        self
    }

    pub fn failing_users(self, status: u16) -> Self {
        *self.users.lock() = Reply::Status(status);
        self
    }

    /// Reply to `create_post` with `post` instead of echoing the draft.
    pub fn with_created(self, post: RemotePost) -> Self {
        *self.create.lock() = Some(Reply::Ok(post));
        self
    }

    pub fn failing_create(self, status: u16) -> Self {
        *self.create.lock() = Some(Reply::Status(status));
        self
    }

    pub fn set_posts(&self, posts: Vec<RemotePost>) {
        *self.posts.lock() = Reply::Ok(posts);
    }

    pub fn set_users(&self, users: Vec<User>) {
        *self.users.lock() = Reply::Ok(users);
    }

    pub fn drafts(&self) -> Vec<DraftPost> {
        self.drafts.lock().clone()
    }

    pub fn posts_calls(&self) -> usize {
        self.posts_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlogApi for FakeApi {
    async fn fetch_posts(&self) -> Result<Vec<RemotePost>, ApiError> {
        self.posts_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let reply = self.posts.lock().clone();
        reply.resolve("/posts")
    }

    async fn create_post(&self, draft: &DraftPost) -> Result<RemotePost, ApiError> {
        self.drafts.lock().push(draft.clone());
        let scripted = self.create.lock().clone();
        match scripted {
            Some(reply) => reply.resolve("/posts"),
            // JSONPlaceholder always answers with id 101.
            None => Ok(RemotePost {
                id: Some(LooseId::Number(101)),
                title: draft.title.clone(),
                body: draft.content.clone(),
                user_id: draft.user_id.clone(),
            }),
        }
    }

    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let reply = self.users.lock().clone();
        reply.resolve("/users")
    }
}
