//! Functional core for the todos API.
//!
//! Pure data types, payload validation and storage contracts. Nothing in
//! this crate performs I/O; the `todos` binary provides the storage
//! backends and the HTTP shell.

pub mod storage;
pub mod todo;
