//! Users slice: the user list, replaced on every successful fetch.

mod intent;
mod reducer;
pub mod selectors;
mod state;

pub use intent::UsersIntent;
pub use reducer::UsersReducer;
pub use state::{User, UsersState};
