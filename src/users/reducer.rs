use crate::mvi::{AsyncPhase, Reducer};

use super::intent::UsersIntent;
use super::state::UsersState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Replace wholesale, never merge.
            UsersIntent::FetchUsers(AsyncPhase::Success(users)) => UsersState { users },
            UsersIntent::FetchUsers(AsyncPhase::Pending | AsyncPhase::Failure(_)) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvi::FailureReason;
    use crate::users::state::User;

    #[test]
    fn success_replaces_users() {
        let state = UsersState {
            users: vec![User::new(1, "a"), User::new(2, "b")],
        };
        let state = UsersReducer::reduce(
            state,
            UsersIntent::FetchUsers(AsyncPhase::Success(vec![User::new(9, "z")])),
        );
        assert_eq!(state.users, vec![User::new(9, "z")]);
    }

    #[test]
    fn failure_keeps_users() {
        let state = UsersState {
            users: vec![User::new(1, "a")],
        };
        let next = UsersReducer::reduce(
            state.clone(),
            UsersIntent::FetchUsers(AsyncPhase::Failure(FailureReason::new("x", "y"))),
        );
        assert_eq!(next, state);
    }
}
