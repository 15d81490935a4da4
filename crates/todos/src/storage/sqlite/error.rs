//! SQLite error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `todos_core::storage`.

use sqlx::error::ErrorKind;
use todos_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - Pool, I/O and configuration errors → `RepositoryError::ConnectionFailed`
/// - Constraint violations → `RepositoryError::InvalidData`
/// - Column decoding errors → `RepositoryError::Serialization`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Configuration(_) => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => RepositoryError::InvalidData(db_err.to_string()),
            _ => RepositoryError::QueryFailed(db_err.to_string()),
        },

        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::TypeNotFound { .. } => RepositoryError::Serialization(err.to_string()),

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
