//! Model-View-Intent (MVI) primitives for the state container.
//!
//! Each slice of the store is built from the same three pieces, and every
//! state change flows in one direction:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Selectors
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable value owned by the store
//! - **Intent**: Local mutation or async lifecycle event
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod lifecycle;
mod reducer;
mod state;

pub use intent::Intent;
pub use lifecycle::{AsyncPhase, FailureReason};
pub use reducer::Reducer;
pub use state::SliceState;
