use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a to-do item by the storage backend.
///
/// Ids are positive, strictly increasing and never handed out twice, even
/// after the item that carried them has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user-editable part of a to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Set the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// A stored to-do record.
///
/// Serializes flat: `{"id":1,"title":"..","description":"..","completed":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItemWithId {
    pub id: TodoId,
    #[serde(flatten)]
    pub item: TodoItem,
}

impl TodoItemWithId {
    pub fn new(id: TodoId, item: TodoItem) -> Self {
        Self { id, item }
    }
}
