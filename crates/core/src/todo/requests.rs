//! API request types for to-do operations.
//!
//! These are pure data types with no I/O, shared by every storage backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{error::TodoError, types::TodoItem};

/// Raw body of `POST /todos`.
///
/// Fields are kept as JSON values so that a number or a missing field is a
/// validation failure with a proper message, not a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub description: Value,
}

impl CreateTodoRequest {
    /// Check that both `title` and `description` are JSON strings.
    pub fn validate(self) -> Result<NewTodo, TodoError> {
        match (self.title, self.description) {
            (Value::String(title), Value::String(description)) => {
                Ok(NewTodo::new(title, description))
            }
            _ => Err(TodoError::NonStringFields),
        }
    }
}

/// A validated creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Convert into an item; new items always start out not completed.
    pub fn into_item(self) -> TodoItem {
        TodoItem::new(self.title, self.description)
    }
}

/// Body of `PUT`/`PATCH /todos/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> CreateTodoRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_validate_accepts_strings() {
        let new_todo = parse(r#"{"title":"a","description":"b"}"#)
            .validate()
            .unwrap();

        assert_eq!(new_todo, NewTodo::new("a", "b"));
    }

    #[test]
    fn test_validate_accepts_empty_strings() {
        let new_todo = parse(r#"{"title":"","description":""}"#)
            .validate()
            .unwrap();

        assert_eq!(new_todo.title, "");
    }

    #[test]
    fn test_validate_rejects_number_title() {
        let result = parse(r#"{"title":123,"description":"x"}"#).validate();

        assert_eq!(result, Err(TodoError::NonStringFields));
    }

    #[test]
    fn test_validate_rejects_missing_description() {
        let result = parse(r#"{"title":"only a title"}"#).validate();

        assert_eq!(result, Err(TodoError::NonStringFields));
    }

    #[test]
    fn test_validate_rejects_null() {
        let result = parse(r#"{"title":null,"description":"x"}"#).validate();

        assert_eq!(result, Err(TodoError::NonStringFields));
    }

    #[test]
    fn test_new_todo_into_item_is_not_completed() {
        let item = NewTodo::new("a", "b").into_item();

        assert!(!item.completed);
    }

    #[test]
    fn test_patch_all_fields_optional() {
        let patch: TodoPatch = serde_json::from_str("{}").unwrap();

        assert!(patch.is_empty());
    }

    #[test]
    fn test_patch_keeps_explicit_false() {
        let patch: TodoPatch = serde_json::from_str(r#"{"completed":false}"#).unwrap();

        assert_eq!(patch.completed, Some(false));
        assert!(patch.title.is_none());
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_patch_null_is_absent() {
        let patch: TodoPatch = serde_json::from_str(r#"{"title":null}"#).unwrap();

        assert!(patch.title.is_none());
    }
}
