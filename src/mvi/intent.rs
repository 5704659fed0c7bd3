//! Base trait for intents (actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Local mutations (a post was written, a reaction was clicked)
/// - Async lifecycle events (request started, payload arrived, request failed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
