//! SQLite storage backend implementation.
//!
//! Uses a `sqlx::SqlitePool`: each query acquires a pooled connection and
//! releases it when the query completes.

mod error;
mod repository;
mod schema;

pub use repository::{PoolSettings, SqliteRepository};
