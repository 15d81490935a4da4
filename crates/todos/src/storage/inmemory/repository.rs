//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{Result, TodoRepository};
use todos_core::todo::{merge_todo, NewTodo, TodoId, TodoItemWithId, TodoPatch};

#[derive(Debug)]
struct Store {
    todos: Vec<TodoItemWithId>,
    next_id: i64,
}

impl Store {
    fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }
}

/// In-memory storage backend.
///
/// Cloning is cheap and every clone shares the same collection, so one
/// instance can be handed to the application state and inspected from tests.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::new())),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn list_todos(&self) -> Result<Vec<TodoItemWithId>> {
        let store = self.store.read().await;
        Ok(store.todos.clone())
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<TodoItemWithId> {
        let mut store = self.store.write().await;

        let id = TodoId::new(store.next_id);
        store.next_id += 1;

        let created = TodoItemWithId::new(id, todo.clone().into_item());
        store.todos.push(created.clone());
        Ok(created)
    }

    async fn get_todo(&self, id: TodoId) -> Result<Option<TodoItemWithId>> {
        let store = self.store.read().await;
        Ok(store.todos.iter().find(|todo| todo.id == id).cloned())
    }

    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Option<TodoItemWithId>> {
        let mut store = self.store.write().await;
        let Some(todo) = store.todos.iter_mut().find(|todo| todo.id == id) else {
            return Ok(None);
        };

        todo.item = merge_todo(&todo.item, patch);
        Ok(Some(todo.clone()))
    }

    async fn delete_todo(&self, id: TodoId) -> Result<Option<TodoItemWithId>> {
        let mut store = self.store.write().await;
        Ok(store.position(id).map(|index| store.todos.remove(index)))
    }
}
