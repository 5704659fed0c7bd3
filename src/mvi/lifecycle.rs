//! Lifecycle of an asynchronous operation as seen by a reducer.

/// One stage of an async operation, dispatched by the thunk that runs it.
///
/// A thunk always dispatches `Pending` first and then exactly one of
/// `Success` or `Failure`.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncPhase<T> {
    /// The request was issued and has not completed yet.
    Pending,

    /// The request completed with a payload.
    Success(T),

    /// The request failed.
    Failure(FailureReason),
}

impl<T> AsyncPhase<T> {
    /// Name of the stage, recorded in dispatch log fields.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success(_) => "fulfilled",
            Self::Failure(_) => "rejected",
        }
    }
}

/// Why an async operation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReason {
    /// Stable machine-readable kind (e.g. "connection_error").
    pub kind: String,
    /// Human-readable message, stored verbatim by slices that keep errors.
    pub message: String,
}

impl FailureReason {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}
