use async_trait::async_trait;

use crate::todo::{NewTodo, TodoId, TodoItemWithId, TodoPatch};

use super::Result;

/// Repository for to-do operations.
///
/// Lookups and mutations by id return `Ok(None)` when no record matches;
/// `Err` is reserved for backend failures.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Lists every to-do in insertion order.
    async fn list_todos(&self) -> Result<Vec<TodoItemWithId>>;

    /// Stores a new, not yet completed to-do and returns it with its id.
    async fn create_todo(&self, todo: &NewTodo) -> Result<TodoItemWithId>;

    /// Gets a to-do by its ID.
    async fn get_todo(&self, id: TodoId) -> Result<Option<TodoItemWithId>>;

    /// Merges `patch` into the stored to-do and returns the result.
    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Option<TodoItemWithId>>;

    /// Deletes a to-do by its ID and returns what was removed.
    async fn delete_todo(&self, id: TodoId) -> Result<Option<TodoItemWithId>>;

    /// Releases backend resources during shutdown.
    async fn close(&self) {}
}
