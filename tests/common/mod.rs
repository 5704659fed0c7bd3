//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_api;
pub mod mock_backend;

use postboard::api::{LooseId, RemotePost};
use postboard::users::User;

/// A post record shaped like the backend serves it.
pub fn remote_post(id: u64, user_id: u64) -> RemotePost {
    RemotePost {
        id: Some(LooseId::Number(id)),
        title: format!("post {id}"),
        body: format!("body of post {id}"),
        user_id: LooseId::Number(user_id),
    }
}

/// `count` remote posts with ids starting at `first_id`.
pub fn remote_posts(first_id: u64, count: u64) -> Vec<RemotePost> {
    (first_id..first_id + count)
        .map(|id| remote_post(id, id % 3 + 1))
        .collect()
}

pub fn users(ids: &[u64]) -> Vec<User> {
    ids.iter()
        .map(|&id| User::new(id, format!("user {id}")))
        .collect()
}
