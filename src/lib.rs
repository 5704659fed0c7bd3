//! In-memory blog state container backed by a REST resource.
//!
//! Two slices (`posts`, `users`) compose into one [`store::Store`]. Local
//! changes are dispatched as intents; remote reads and writes go through the
//! thunks in [`store::thunks`], which talk to a [`api::BlogApi`].

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod posts;
pub mod store;
pub mod users;
