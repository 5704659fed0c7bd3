//! Root store composing the posts and users slices.
//!
//! The store is created by the composition root and handed to whoever needs
//! it by reference. Every state change goes through [`Store::dispatch`],
//! which runs the matching slice reducer while holding the state lock, so
//! transitions never interleave.

pub mod thunks;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::mvi::{Intent, Reducer, SliceState};
use crate::posts::{PostsIntent, PostsReducer, PostsState};
use crate::users::{UsersIntent, UsersReducer, UsersState};

/// The whole state tree, keyed by slice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RootState {
    pub posts: PostsState,
    pub users: UsersState,
}

impl SliceState for RootState {}

/// Any action the store accepts, tagged by the slice it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Posts(PostsIntent),
    Users(UsersIntent),
}

impl Intent for Action {}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Posts(intent) => intent.name(),
            Action::Users(intent) => intent.name(),
        }
    }

    /// `pending`, `fulfilled` or `rejected` for async lifecycle actions.
    pub fn stage(&self) -> Option<&'static str> {
        match self {
            Action::Posts(intent) => intent.stage(),
            Action::Users(intent) => intent.stage(),
        }
    }
}

impl From<PostsIntent> for Action {
    fn from(intent: PostsIntent) -> Self {
        Action::Posts(intent)
    }
}

impl From<UsersIntent> for Action {
    fn from(intent: UsersIntent) -> Self {
        Action::Users(intent)
    }
}

/// Routes each action to the reducer of its slice.
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = RootState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            Action::Posts(intent) => RootState {
                posts: PostsReducer::reduce(state.posts, intent),
                ..state
            },
            Action::Users(intent) => RootState {
                users: UsersReducer::reduce(state.users, intent),
                ..state
            },
        }
    }
}

/// Owner of the root state.
pub struct Store {
    state: watch::Sender<RootState>,
}

impl Store {
    /// Create a store in its initial state.
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    /// Create a store seeded with `state`.
    pub fn with_state(state: RootState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { state: tx }
    }

    /// Apply an action.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        self.state.send_modify(|state| apply(state, action));
    }

    /// Apply an action and project the resulting state in the same step.
    pub fn dispatch_then<R: Default>(
        &self,
        action: impl Into<Action>,
        select: impl FnOnce(&RootState) -> R,
    ) -> R {
        let action = action.into();
        let mut selected = R::default();
        self.state.send_modify(|state| {
            apply(state, action);
            selected = select(state);
        });
        selected
    }

    /// Apply an action only if `condition` holds for the current state.
    ///
    /// The check and the transition happen under the same lock. Returns
    /// whether the action was applied.
    pub fn dispatch_if(
        &self,
        condition: impl FnOnce(&RootState) -> bool,
        action: impl Into<Action>,
    ) -> bool {
        let action = action.into();
        self.state.send_if_modified(|state| {
            if !condition(state) {
                tracing::debug!(action = action.name(), stage = action.stage(), "dispatch skipped");
                return false;
            }
            apply(state, action);
            true
        })
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RootState {
        self.state.borrow().clone()
    }

    /// Run a selector against the current state.
    pub fn select<R>(&self, selector: impl FnOnce(&RootState) -> R) -> R {
        selector(&self.state.borrow())
    }

    /// Receive a notification after every applied action.
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.state.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(state: &mut RootState, action: Action) {
    tracing::trace!(action = action.name(), stage = action.stage(), "dispatch");
    let prev = std::mem::take(state);
    *state = RootReducer::reduce(prev, action);
}
