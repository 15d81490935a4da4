use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use todos_core::storage::{repository_error_to_status_code, RepositoryError};
use todos_core::todo::{StatusResponse, TodoError};

/// Message returned whenever an id matches no to-do.
pub const NOT_FOUND_MESSAGE: &str = "Could not find a to-do with that id";

/// Errors returned by the to-do handlers.
///
/// Client problems render as `{"status":"fail","data":...}`, backend
/// failures as `{"status":"error","message":...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be read as JSON.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Validation(#[from] TodoError),

    /// No to-do with that id; the message is keyed by `id` in the payload.
    #[error("Could not find a to-do with that id")]
    IdNotFound,

    /// No to-do with that id; the message is the whole payload.
    #[error("Could not find a to-do with that id")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidBody(_) | ApiError::Validation(_) => {
                tracing::warn!(error = %self, "Rejected request body");
                (StatusCode::BAD_REQUEST, StatusResponse::fail(self.to_string()))
            }
            ApiError::IdNotFound => (
                StatusCode::NOT_FOUND,
                StatusResponse::fail(json!({ "id": NOT_FOUND_MESSAGE })),
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, StatusResponse::fail(NOT_FOUND_MESSAGE)),
            ApiError::Repository(repo_error) => {
                tracing::error!(error = %repo_error, "Storage error");
                let status = StatusCode::from_u16(repository_error_to_status_code(repo_error))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, StatusResponse::error(repo_error.to_string()))
            }
        };

        (status, Json(body)).into_response()
    }
}
