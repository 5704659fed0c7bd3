use crate::mvi::{AsyncPhase, Intent};

use super::state::User;

#[derive(Debug, Clone, PartialEq)]
pub enum UsersIntent {
    /// Lifecycle of `fetch_users`.
    FetchUsers(AsyncPhase<Vec<User>>),
}

impl Intent for UsersIntent {}

impl UsersIntent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchUsers(_) => "users/fetchUsers",
        }
    }

    pub fn stage(&self) -> Option<&'static str> {
        match self {
            Self::FetchUsers(phase) => Some(phase.stage()),
        }
    }
}
