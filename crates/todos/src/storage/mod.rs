//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `TodoRepository`
//! trait defined in `todos_core::storage`. Both backends are always compiled;
//! the active one is chosen at startup from [`crate::config::StorageBackend`].
//!
//! - `inmemory`: ordered collection owned by the process, no persistence
//! - `sqlite`: `todos` table behind a `sqlx` connection pool

pub mod inmemory;
pub mod sqlite;

pub use inmemory::InMemoryRepository;
pub use sqlite::{PoolSettings, SqliteRepository};
