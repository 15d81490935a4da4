//! In-memory storage backend.
//!
//! Keeps every to-do in an ordered `Vec` behind an `Arc<RwLock<_>>`, together
//! with the counter used to hand out ids. Nothing is persisted; data is lost
//! when the last clone of the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
