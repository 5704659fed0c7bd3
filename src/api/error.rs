//! Error types for calls against the remote resource.

use thiserror::Error;

use crate::mvi::FailureReason;

/// Errors that can occur while talking to the blog backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response
    #[error("Request to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("Request to '{url}' failed with status code {status}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A user id could not be read as a number
    #[error("Invalid user id '{0}'")]
    InvalidUserId(String),
}

impl ApiError {
    /// Get error type string for logs and failure reasons
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::InvalidUserId(_) => "invalid_user_id",
        }
    }
}

impl From<&ApiError> for FailureReason {
    fn from(err: &ApiError) -> Self {
        FailureReason::new(err.kind(), err.to_string())
    }
}
