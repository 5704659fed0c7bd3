//! Wire shapes of the remote post resource.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::posts::IncomingPost;

use super::error::ApiError;

/// An id that may arrive as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseId {
    Number(u64),
    Text(String),
}

impl LooseId {
    /// Numeric value, accepting strings such as `"3"`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            LooseId::Number(n) => Some(*n),
            LooseId::Text(s) => s.trim().parse().ok(),
        }
    }

    fn require_u64(&self) -> Result<u64, ApiError> {
        self.as_u64()
            .ok_or_else(|| ApiError::InvalidUserId(self.to_string()))
    }
}

impl fmt::Display for LooseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LooseId::Number(n) => write!(f, "{n}"),
            LooseId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for LooseId {
    fn from(n: u64) -> Self {
        LooseId::Number(n)
    }
}

impl From<&str> for LooseId {
    fn from(s: &str) -> Self {
        LooseId::Text(s.to_string())
    }
}

impl From<String> for LooseId {
    fn from(s: String) -> Self {
        LooseId::Text(s)
    }
}

/// A post the user wants to publish. Serialized in the backend's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPost {
    pub title: String,
    #[serde(rename = "body")]
    pub content: String,
    pub user_id: LooseId,
}

impl DraftPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: impl Into<LooseId>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            user_id: user_id.into(),
        }
    }

    /// Author id as a number.
    pub fn numeric_user_id(&self) -> Result<u64, ApiError> {
        self.user_id.require_u64()
    }
}

/// A post record as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePost {
    #[serde(default)]
    pub id: Option<LooseId>,
    pub title: String,
    pub body: String,
    pub user_id: LooseId,
}

impl RemotePost {
    /// Map to local field names. Fails if `userId` is not numeric.
    pub fn into_incoming(self) -> Result<IncomingPost, ApiError> {
        let user_id = self.user_id.require_u64()?;
        Ok(IncomingPost {
            id: self.id.map(|id| id.to_string()).unwrap_or_default(),
            title: self.title,
            content: self.body,
            user_id,
        })
    }
}
