use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::LooseId;
use crate::mvi::SliceState;

/// A user record as returned by the remote source.
///
/// Only `id` and `name` are read locally; every other field is kept as-is.
/// The id may be served as a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: LooseId,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: LooseId::Number(id),
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// State of the users slice. Serialized as a bare list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsersState {
    pub users: Vec<User>,
}

impl SliceState for UsersState {}
