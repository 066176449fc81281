//! # Todo Handlers
//!
//! CRUD endpoints over the singleton todo. Every handler except health seeds
//! the default todo when storage is empty before doing its work.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonObject, TodoId};
use crate::models::{AppState, Todo, TodoDraft, TodoPatch};

/// Lists all stored todos.
///
/// GET /api/v1/todos
///
/// # Returns
///
/// - `200 OK` with an array of zero or one todo
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn list_todos(State(state): State<Arc<AppState>>) -> Json<Vec<Todo>> {
    debug!("Processing list request");
    Json(state.store.list().await)
}

/// Creates the todo, replacing whatever was stored.
///
/// POST /api/v1/todos
///
/// Missing fields take the seed todo's values. Any `id` in the body is
/// ignored; the created todo always has id 1.
///
/// # Returns
///
/// - `201 Created` with the new todo
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    JsonObject(body): JsonObject,
) -> (StatusCode, Json<Todo>) {
    debug!(fields = body.len(), "Processing create request");

    let draft = TodoDraft::from_body(&body);
    let todo = state.store.create(draft).await;

    (StatusCode::CREATED, Json(todo))
}

/// Gets a todo by id.
///
/// GET /api/v1/todos/{id}
///
/// # Returns
///
/// - `200 OK` with the todo
/// - `404 Not Found` with `{"error": "not found"}` - No todo with this id
#[instrument(skip_all, fields(id = id, request_id = %uuid::Uuid::new_v4()))]
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
) -> AppResult<Json<Todo>> {
    debug!("Processing get request");

    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Updates the fields present in the body and refreshes `updated_at`.
///
/// PUT /api/v1/todos/{id}
///
/// # Returns
///
/// - `200 OK` with the updated todo
/// - `404 Not Found` with `{"error": "not found"}` - No todo with this id
#[instrument(skip_all, fields(id = id, request_id = %uuid::Uuid::new_v4()))]
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
    JsonObject(body): JsonObject,
) -> AppResult<Json<Todo>> {
    debug!(fields = body.len(), "Processing update request");

    let patch = TodoPatch::from_body(&body);
    state
        .store
        .update(id, patch)
        .await
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Deletes a todo by id.
///
/// DELETE /api/v1/todos/{id}
///
/// Deleting an id that does not exist is not an error.
///
/// # Returns
///
/// - `200 OK` with the deleted todo
/// - `200 OK` with `{}` - No todo with this id
#[instrument(skip_all, fields(id = id, request_id = %uuid::Uuid::new_v4()))]
pub async fn delete_todo(State(state): State<Arc<AppState>>, TodoId(id): TodoId) -> Response {
    debug!("Processing delete request");

    match state.store.delete(id).await {
        Some(todo) => Json(todo).into_response(),
        None => {
            info!("Delete requested for missing todo");
            Json(json!({})).into_response()
        }
    }
}
