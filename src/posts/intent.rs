//! Intents for the posts slice.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::mvi::{AsyncPhase, Intent};

use super::state::{iso_timestamp, Post, ReactionKind, Reactions};

/// A post as delivered by the remote source, already mapped to local field
/// names and with a numeric author id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub user_id: u64,
}

impl IncomingPost {
    /// A stored post dated `date`, with no reactions yet.
    pub fn into_post(self, date: String) -> Post {
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            date,
            user_id: self.user_id,
            reactions: Reactions::default(),
        }
    }
}

/// Payload of a successful posts fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPosts {
    pub posts: Vec<IncomingPost>,
    /// Reference time for the synthetic per-post timestamps.
    pub fetched_at: DateTime<Utc>,
}

/// Payload of a successful post creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPost {
    pub post: IncomingPost,
    pub created_at: DateTime<Utc>,
}

/// Intents that can be dispatched to the posts slice.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsIntent {
    /// A locally written post, fully prepared.
    PostAdded { post: Post },

    /// A reader reacted to a post.
    ReactionAdded {
        post_id: String,
        reaction: ReactionKind,
    },

    /// Lifecycle of `fetch_posts`.
    FetchPosts(AsyncPhase<FetchedPosts>),

    /// Lifecycle of `add_new_post`.
    AddNewPost(AsyncPhase<CreatedPost>),
}

impl Intent for PostsIntent {}

impl PostsIntent {
    /// Prepare a `PostAdded` intent with a fresh id and the current time.
    pub fn post_added(
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: u64,
    ) -> Self {
        Self::post_added_at(title, content, user_id, Utc::now())
    }

    /// Same as [`PostsIntent::post_added`] with an explicit timestamp.
    pub fn post_added_at(
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: u64,
        at: DateTime<Utc>,
    ) -> Self {
        Self::PostAdded {
            post: Post {
                id: Uuid::new_v4().to_string(),
                title: title.into(),
                content: content.into(),
                date: iso_timestamp(at),
                user_id,
                reactions: Reactions::default(),
            },
        }
    }

    pub fn reaction_added(post_id: impl Into<String>, reaction: ReactionKind) -> Self {
        Self::ReactionAdded {
            post_id: post_id.into(),
            reaction,
        }
    }

    /// Intent name, used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PostAdded { .. } => "posts/postAdded",
            Self::ReactionAdded { .. } => "posts/reactionAdded",
            Self::FetchPosts(_) => "posts/fetchPosts",
            Self::AddNewPost(_) => "posts/addNewPost",
        }
    }

    /// Lifecycle stage of an async intent; `None` for plain ones.
    pub fn stage(&self) -> Option<&'static str> {
        match self {
            Self::FetchPosts(phase) => Some(phase.stage()),
            Self::AddNewPost(phase) => Some(phase.stage()),
            Self::PostAdded { .. } | Self::ReactionAdded { .. } => None,
        }
    }
}
