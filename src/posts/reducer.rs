//! Reducer for the posts slice.

use chrono::{DateTime, Duration, Utc};

use crate::mvi::{AsyncPhase, Reducer};

use super::intent::{CreatedPost, FetchedPosts, IncomingPost, PostsIntent};
use super::state::{iso_timestamp, FetchStatus, PostsState};

/// Reducer for posts slice state transitions.
pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::PostAdded { post } => {
                let mut posts = state.posts;
                posts.push(post);
                PostsState { posts, ..state }
            }

            PostsIntent::ReactionAdded { post_id, reaction } => {
                let mut posts = state.posts;
                // Unknown ids are ignored.
                if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
                    post.reactions.increment(reaction);
                }
                PostsState { posts, ..state }
            }

            PostsIntent::FetchPosts(phase) => match phase {
                AsyncPhase::Pending => PostsState {
                    status: FetchStatus::Loading,
                    ..state
                },
                AsyncPhase::Success(FetchedPosts { posts: fetched, fetched_at }) => {
                    let mut posts = state.posts;
                    posts.extend(
                        fetched
                            .into_iter()
                            .zip(1i64..)
                            .map(|(incoming, minutes)| {
                                incoming.into_post(backdated(fetched_at, minutes))
                            }),
                    );
                    PostsState {
                        posts,
                        status: FetchStatus::Succeeded,
                        ..state
                    }
                }
                AsyncPhase::Failure(reason) => PostsState {
                    status: FetchStatus::Failed,
                    error: Some(reason.message),
                    ..state
                },
            },

            PostsIntent::AddNewPost(phase) => match phase {
                AsyncPhase::Success(CreatedPost { post, created_at }) => {
                    // The backend does not allocate usable ids.
                    let id = state.next_numeric_id().to_string();
                    let mut posts = state.posts;
                    posts.push(IncomingPost { id, ..post }.into_post(iso_timestamp(created_at)));
                    PostsState { posts, ..state }
                }
                AsyncPhase::Pending | AsyncPhase::Failure(_) => state,
            },
        }
    }
}

/// Each fetched post is placed one minute further in the past than the
/// previous one so the list keeps the server order when sorted by date.
fn backdated(fetched_at: DateTime<Utc>, minutes: i64) -> String {
    iso_timestamp(fetched_at - Duration::minutes(minutes))
}
