//! To-do CRUD handlers.
//!
//! Each handler decodes the path and body, makes one repository call and
//! maps the outcome to a status code and JSON body.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use todos_core::todo::{
    parse_todo_id, CreateTodoRequest, StatusResponse, TodoId, TodoItemWithId, TodoPatch,
};

use crate::{handlers::ApiError, state::AppState};

/// Unwrap a JSON body.
///
/// A request that isn't declared as JSON (including one with no body at all)
/// reads as an empty payload. JSON that fails to parse is a 400.
fn json_body<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(ApiError::InvalidBody(rejection.body_text())),
    }
}

/// Parse the `{id}` path segment. An unparseable id is reported with
/// `not_found`, since no record can match it.
fn todo_id(raw: &str, not_found: ApiError) -> Result<TodoId, ApiError> {
    parse_todo_id(raw).ok_or_else(|| {
        tracing::debug!(raw_id = %raw, "Unparseable to-do id");
        not_found
    })
}

/// List all to-dos (GET /todos).
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoItemWithId>>, ApiError> {
    let todos = state.todo_repo.list_todos().await?;
    Ok(Json(todos))
}

/// Create a new to-do (POST /todos).
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoItemWithId>), ApiError> {
    let new_todo = json_body(payload)?.validate()?;

    let todo = state.todo_repo.create_todo(&new_todo).await?;

    tracing::info!(todo_id = %todo.id, title = %todo.item.title, "Created new to-do");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Get a single to-do by ID (GET /todos/{id}).
pub async fn get_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TodoItemWithId>, ApiError> {
    let id = todo_id(&raw_id, ApiError::IdNotFound)?;

    match state.todo_repo.get_todo(id).await? {
        Some(todo) => Ok(Json(todo)),
        None => {
            tracing::debug!(todo_id = %id, "To-do not found");
            Err(ApiError::IdNotFound)
        }
    }
}

/// Update a to-do (PUT or PATCH /todos/{id}).
///
/// Only the fields present in the body are changed.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<TodoItemWithId>, ApiError> {
    let patch = json_body(payload)?;
    let id = todo_id(&raw_id, ApiError::NotFound)?;

    match state.todo_repo.update_todo(id, &patch).await? {
        Some(todo) => {
            tracing::info!(todo_id = %id, patch = ?patch, "Updated to-do");
            Ok(Json(todo))
        }
        None => {
            tracing::debug!(todo_id = %id, "To-do not found");
            Err(ApiError::NotFound)
        }
    }
}

/// Delete a to-do (DELETE /todos/{id}).
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = todo_id(&raw_id, ApiError::NotFound)?;

    match state.todo_repo.delete_todo(id).await? {
        Some(todo) => {
            tracing::info!(todo_id = %id, title = %todo.item.title, "Deleted to-do");
            Ok(Json(StatusResponse::Success))
        }
        None => {
            tracing::debug!(todo_id = %id, "To-do not found");
            Err(ApiError::NotFound)
        }
    }
}
