//! Posts slice: the post list, its fetch status and the last fetch error.

mod intent;
mod reducer;
pub mod selectors;
mod state;

pub use intent::{CreatedPost, FetchedPosts, IncomingPost, PostsIntent};
pub use reducer::PostsReducer;
pub use state::{
    iso_timestamp, FetchStatus, Post, PostsState, ReactionKind, Reactions, UnknownReaction,
};
