//! Application state with repository-based storage.
//!
//! The state owns the storage backend and is cloned into every request
//! handler. Tests build their own state, so each test gets an isolated
//! collection.

use std::{path::PathBuf, sync::Arc, time::Duration};

use todos_core::storage::TodoRepository;

use crate::{
    config::{Config, StorageBackend},
    storage::{InMemoryRepository, SqliteRepository},
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Active storage backend.
    pub todo_repo: Arc<dyn TodoRepository>,
    /// Static API info page served on `GET /`.
    pub index_file: PathBuf,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates an AppState around an existing repository.
    pub fn build(todo_repo: Arc<dyn TodoRepository>, config: &Config) -> Self {
        Self {
            todo_repo,
            index_file: config.index_file.clone(),
            request_timeout: config.request_timeout(),
        }
    }

    /// Creates the AppState for the backend selected in `config`.
    ///
    /// Fails when the sqlite backend is selected without a connection string
    /// or the database cannot be opened.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let todo_repo: Arc<dyn TodoRepository> = match config.storage {
            StorageBackend::Memory => Arc::new(InMemoryRepository::new()),
            StorageBackend::Sqlite => {
                let database_url = config.require_database_url()?;
                let settings = config.pool_settings()?;
                Arc::new(SqliteRepository::connect(database_url, settings).await?)
            }
        };

        tracing::info!(backend = config.storage.as_str(), "Storage backend ready");

        Ok(Self::build(todo_repo, config))
    }

    /// Releases storage resources. Called once the server has stopped.
    pub async fn close(&self) {
        self.todo_repo.close().await;
    }
}

impl Default for AppState {
    /// In-memory state with default configuration.
    fn default() -> Self {
        Self::build(Arc::new(InMemoryRepository::new()), &Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sqlite_without_database_url_fails_fast() {
        let config = Config {
            storage: StorageBackend::Sqlite,
            ..Config::default()
        };

        let result = AppState::new(&config).await;

        let err = result.err().expect("startup should fail");
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[tokio::test]
    async fn test_sqlite_with_zero_max_connections_fails_fast() {
        let config = Config {
            storage: StorageBackend::Sqlite,
            database_url: Some("sqlite::memory:".to_string()),
            db_max_connections: 0,
            ..Config::default()
        };

        let result = AppState::new(&config).await;

        let err = result.err().expect("startup should fail");
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
    }

    #[tokio::test]
    async fn test_memory_backend_needs_no_database_url() {
        let state = AppState::new(&Config::default()).await.unwrap();

        assert!(state.todo_repo.list_todos().await.unwrap().is_empty());
    }
}
