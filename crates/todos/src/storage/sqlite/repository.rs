//! SQLite repository implementation.
//!
//! Implements `TodoRepository` from `todos_core::storage` on top of a
//! `sqlx::SqlitePool`.

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{NewTodo, TodoId, TodoItem, TodoItemWithId, TodoPatch};

use super::error::map_sqlx_error;
use super::schema;

/// Row shape shared by every statement: `id, title, description, completed`.
type TodoRow = (i64, String, String, bool);

fn row_to_todo((id, title, description, completed): TodoRow) -> TodoItemWithId {
    TodoItemWithId::new(
        TodoId::new(id),
        TodoItem::new(title, description).with_completed(completed),
    )
}

/// Connection pool tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Opens a pool against `database_url` (e.g. `sqlite://todos.db`).
    ///
    /// The database file is created if it doesn't exist and the `todos`
    /// table is created automatically.
    pub async fn connect(database_url: &str, settings: PoolSettings) -> Result<Self> {
        if settings.max_connections == 0 {
            return Err(RepositoryError::ConnectionFailed(
                "pool needs at least one connection".to_string(),
            ));
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Creates a repository over an in-memory database.
    ///
    /// Every pooled connection to `sqlite::memory:` would get its own empty
    /// database, so the pool is pinned to a single connection that is never
    /// recycled. Useful for testing.
    pub async fn new_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Initialize the database schema.
    async fn init_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(schema::CREATE_TABLES)
            .execute(pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn list_todos(&self) -> Result<Vec<TodoItemWithId>> {
        let rows = sqlx::query_as::<_, TodoRow>(schema::SELECT_TODOS)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(row_to_todo).collect())
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<TodoItemWithId> {
        let row = sqlx::query_as::<_, TodoRow>(schema::INSERT_TODO)
            .bind(todo.title.as_str())
            .bind(todo.description.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row_to_todo(row))
    }

    async fn get_todo(&self, id: TodoId) -> Result<Option<TodoItemWithId>> {
        let row = sqlx::query_as::<_, TodoRow>(schema::SELECT_TODO_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(row_to_todo))
    }

    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Option<TodoItemWithId>> {
        // Nothing to write
        if patch.is_empty() {
            return self.get_todo(id).await;
        }

        let row = sqlx::query_as::<_, TodoRow>(schema::UPDATE_TODO)
            .bind(patch.title.as_deref())
            .bind(patch.description.as_deref())
            .bind(patch.completed)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(row_to_todo))
    }

    async fn delete_todo(&self, id: TodoId) -> Result<Option<TodoItemWithId>> {
        let row = sqlx::query_as::<_, TodoRow>(schema::DELETE_TODO)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(row_to_todo))
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SQLite pool closed");
    }
}
