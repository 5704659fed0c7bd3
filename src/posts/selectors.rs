//! Read-only projections of the posts slice.

use crate::store::RootState;

use super::state::{FetchStatus, Post};

pub fn select_all_posts(state: &RootState) -> &[Post] {
    &state.posts.posts
}

pub fn get_posts_status(state: &RootState) -> FetchStatus {
    state.posts.status
}

pub fn get_posts_error(state: &RootState) -> Option<&str> {
    state.posts.error.as_deref()
}

pub fn select_post_by_id<'a>(state: &'a RootState, post_id: &str) -> Option<&'a Post> {
    state.posts.posts.iter().find(|post| post.id == post_id)
}

/// Posts newest first. Ties keep their stored order.
pub fn select_posts_by_date(state: &RootState) -> Vec<&Post> {
    let mut posts: Vec<&Post> = state.posts.posts.iter().collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

pub fn select_posts_by_user(state: &RootState, user_id: u64) -> Vec<&Post> {
    state
        .posts
        .posts
        .iter()
        .filter(|post| post.user_id == user_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::state::{PostsState, Reactions};

    fn post(id: &str, date: &str, user_id: u64) -> Post {
        Post {
            id: id.to_string(),
            title: String::new(),
            content: String::new(),
            date: date.to_string(),
            user_id,
            reactions: Reactions::default(),
        }
    }

    fn root() -> RootState {
        RootState {
            posts: PostsState {
                posts: vec![
                    post("1", "2024-05-01T11:58:00.000Z", 1),
                    post("2", "2024-05-01T12:00:00.000Z", 2),
                    post("3", "2024-05-01T11:59:00.000Z", 1),
                ],
                ..PostsState::default()
            },
            ..RootState::default()
        }
    }

    #[test]
    fn ordered_newest_first() {
        let state = root();
        let ids: Vec<&str> = select_posts_by_date(&state)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["2", "3", "1"]);
    }

    #[test]
    fn by_user_filters_author() {
        let state = root();
        assert_eq!(select_posts_by_user(&state, 1).len(), 2);
        assert!(select_posts_by_user(&state, 42).is_empty());
    }

    #[test]
    fn by_id_finds_post() {
        let state = root();
        assert_eq!(select_post_by_id(&state, "3").map(|p| p.user_id), Some(1));
        assert!(select_post_by_id(&state, "99").is_none());
    }
}
