//! Async operations that drive the store through `Pending` and then
//! `Success` or `Failure`.

use chrono::Utc;

use crate::api::{ApiError, BlogApi, DraftPost};
use crate::mvi::{AsyncPhase, FailureReason};
use crate::posts::{iso_timestamp, CreatedPost, FetchedPosts, IncomingPost, Post, PostsIntent};
use crate::users::UsersIntent;

use super::Store;

/// Keeps an in-flight posts fetch from staying `Loading` forever.
///
/// If the fetch future is dropped before it settles (a timeout, a lost
/// `select!` branch, an aborted task), the guard records the fetch as failed
/// so the next `fetch_posts` is not skipped.
struct FetchGuard<'a> {
    store: Option<&'a Store>,
}

impl<'a> FetchGuard<'a> {
    fn new(store: &'a Store) -> Self {
        Self { store: Some(store) }
    }

    /// The fetch settled on its own.
    fn disarm(mut self) {
        self.store = None;
    }
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        if let Some(store) = self.store.take() {
            tracing::warn!("posts fetch cancelled");
            store.dispatch(PostsIntent::FetchPosts(AsyncPhase::Failure(
                FailureReason::new("cancelled", "Posts request was cancelled"),
            )));
        }
    }
}

/// What happened to a `fetch_posts` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPostsOutcome {
    /// Posts were appended to the slice.
    Fetched { count: usize },
    /// The fetch failed; the message is also stored in the slice.
    Failed { message: String },
    /// Another fetch was already in flight; nothing was requested.
    Skipped,
}

/// Fetch all posts and append them to the posts slice.
///
/// A request made while the slice is already loading is skipped. Failures
/// are recorded in the slice rather than returned. Dropping the future
/// before it completes records a cancellation failure.
pub async fn fetch_posts(store: &Store, api: &dyn BlogApi) -> FetchPostsOutcome {
    let started = store.dispatch_if(
        |state| !state.posts.is_loading(),
        PostsIntent::FetchPosts(AsyncPhase::Pending),
    );
    if !started {
        tracing::debug!("posts fetch already in flight");
        return FetchPostsOutcome::Skipped;
    }
    let guard = FetchGuard::new(store);

    let fetched = match api.fetch_posts().await {
        Ok(remote) => remote
            .into_iter()
            .map(|post| post.into_incoming())
            .collect::<Result<Vec<IncomingPost>, ApiError>>(),
        Err(e) => Err(e),
    };

    guard.disarm();
    match fetched {
        Ok(posts) => {
            let count = posts.len();
            store.dispatch(PostsIntent::FetchPosts(AsyncPhase::Success(FetchedPosts {
                posts,
                fetched_at: Utc::now(),
            })));
            tracing::info!(count, "posts fetched");
            FetchPostsOutcome::Fetched { count }
        }
        Err(e) => {
            let reason = FailureReason::from(&e);
            tracing::warn!(kind = %reason.kind, error = %reason.message, "posts fetch failed");
            let message = reason.message.clone();
            store.dispatch(PostsIntent::FetchPosts(AsyncPhase::Failure(reason)));
            FetchPostsOutcome::Failed { message }
        }
    }
}

/// Publish a draft and append the created post to the posts slice.
///
/// The stored post gets the next numeric id and a numeric `user_id`.
/// On failure the slice is left unchanged and the error is returned.
pub async fn add_new_post(
    store: &Store,
    api: &dyn BlogApi,
    draft: DraftPost,
) -> Result<Post, ApiError> {
    let user_id = draft.numeric_user_id()?;

    store.dispatch(PostsIntent::AddNewPost(AsyncPhase::Pending));

    let created = match api.create_post(&draft).await {
        Ok(remote) => remote,
        Err(e) => {
            tracing::warn!(kind = e.kind(), error = %e, "post creation failed");
            store.dispatch(PostsIntent::AddNewPost(AsyncPhase::Failure(
                FailureReason::from(&e),
            )));
            return Err(e);
        }
    };

    let incoming = IncomingPost {
        id: String::new(),
        title: created.title,
        content: created.body,
        user_id: created.user_id.as_u64().unwrap_or(user_id),
    };
    let created_at = Utc::now();
    let local = incoming.clone().into_post(iso_timestamp(created_at));

    // The reducer allocates the id, so the stored copy is the one to return.
    let post = store
        .dispatch_then(
            PostsIntent::AddNewPost(AsyncPhase::Success(CreatedPost {
                post: incoming,
                created_at,
            })),
            |state| state.posts.posts.last().cloned(),
        )
        .unwrap_or(local);

    tracing::info!(id = %post.id, user_id = post.user_id, "post created");
    Ok(post)
}

/// Fetch all users and replace the users slice with them.
///
/// On failure the slice is left unchanged and the error is returned.
pub async fn fetch_users(store: &Store, api: &dyn BlogApi) -> Result<usize, ApiError> {
    store.dispatch(UsersIntent::FetchUsers(AsyncPhase::Pending));

    match api.fetch_users().await {
        Ok(users) => {
            let count = users.len();
            store.dispatch(UsersIntent::FetchUsers(AsyncPhase::Success(users)));
            tracing::info!(count, "users fetched");
            Ok(count)
        }
        Err(e) => {
            tracing::warn!(kind = e.kind(), error = %e, "users fetch failed");
            store.dispatch(UsersIntent::FetchUsers(AsyncPhase::Failure(
                FailureReason::from(&e),
            )));
            Err(e)
        }
    }
}
