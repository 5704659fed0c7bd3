use crate::store::RootState;

use super::state::User;

pub fn select_all_users(state: &RootState) -> &[User] {
    &state.users.users
}

/// Matches numeric and numeric-string ids alike.
pub fn select_user_by_id(state: &RootState, user_id: u64) -> Option<&User> {
    state
        .users
        .users
        .iter()
        .find(|user| user.id.as_u64() == Some(user_id))
}
