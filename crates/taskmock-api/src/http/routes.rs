//! HTTP route definitions and handlers.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::error;

use taskmock_domain::{List, Task};
use taskmock_storage::{SessionStore, StorageError};

use super::state::AppState;

/// Custom JSON extractor that returns 400 Bad Request instead of 422
/// Unprocessable Entity for deserialization errors.
///
/// Preserves 413 Payload Too Large for body limit errors.
pub struct JsonBadRequest<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBadRequest<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiError>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBadRequest(value)),
            Err(rejection) => {
                let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    StatusCode::PAYLOAD_TOO_LARGE
                } else {
                    StatusCode::BAD_REQUEST
                };

                let message = rejection.body_text();
                let error = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::new(error_codes::PAYLOAD_TOO_LARGE, message)
                } else {
                    ApiError::validation_error(message)
                };

                Err((status, Json(error)))
            }
        }
    }
}

/// Default request body size limit (64KB).
/// Mock payloads are tiny; anything larger is a harness bug.
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Private helper for the mock API routes.
fn api_routes<S: SessionStore>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // List management
        .route("/api/v1/lists", post(create_list::<S>))
        .route("/api/v1/lists/:list_id", axum::routing::delete(delete_list::<S>))
        // Task management
        .route("/api/v1/lists/:list_id/tasks", post(create_task::<S>))
        .route(
            "/api/v1/tasks/:task_id",
            patch(update_task::<S>).delete(delete_task::<S>),
        )
}

/// Creates the HTTP router with all mock backend endpoints.
///
/// Applies the default body size limit (64KB).
pub fn create_router<S: SessionStore>(state: AppState<S>) -> Router {
    create_router_with_body_limit(state, DEFAULT_BODY_LIMIT)
}

/// Creates the HTTP router with a custom body size limit.
///
/// # Arguments
///
/// * `state` - Application state with session store backend
/// * `body_limit` - Maximum request body size in bytes
pub fn create_router_with_body_limit<S: SessionStore>(
    state: AppState<S>,
    body_limit: usize,
) -> Router {
    let shared_state = Arc::new(state);
    api_routes::<S>()
        // Health check for harness readiness probing
        .route("/health", get(health_check))
        .with_state(shared_state)
        .layer(RequestBodyLimitLayer::new(body_limit))
}

// ============================================================
// Error Handling
// ============================================================

/// Wire error codes returned by the mock backend.
///
/// Each code maps to an HTTP status via [`ApiError::into_response`]:
///
/// - [`TASK_NOT_FOUND`] (404) - mutation targeted a task id absent from
///   the store
/// - [`VALIDATION_ERROR`] (400) - malformed body or path parameter
/// - [`PAYLOAD_TOO_LARGE`] (413) - request body exceeds the size limit
/// - [`INTERNAL_ERROR`] (500) - unexpected failure
pub mod error_codes {
    /// Task with the specified id does not exist in the session store.
    pub const TASK_NOT_FOUND: &str = "task_not_found";
    /// Generic input validation error (invalid format, missing fields).
    pub const VALIDATION_ERROR: &str = "validation_error";
    /// Request body exceeds maximum allowed size.
    pub const PAYLOAD_TOO_LARGE: &str = "payload_too_large";
    /// Unexpected internal server error.
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// API error response format.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a task not found error (404).
    pub fn task_not_found(message: impl Into<String>) -> Self {
        Self::new(error_codes::TASK_NOT_FOUND, message)
    }

    /// Creates a validation error (400).
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new(error_codes::VALIDATION_ERROR, message)
    }

    /// Creates an internal error (500).
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(error_codes::INTERNAL_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use error_codes::*;

        let status = match self.code.as_str() {
            TASK_NOT_FOUND => StatusCode::NOT_FOUND,
            VALIDATION_ERROR => StatusCode::BAD_REQUEST,
            PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        error!("Storage error: {}", err);
        ApiError::internal_error(err.to_string())
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// Serializes an entity into its stored payload form.
fn to_stored<T: Serialize>(entity: &T) -> ApiResult<serde_json::Value> {
    serde_json::to_value(entity).map_err(|e| {
        error!("Failed to serialize entity: {}", e);
        ApiError::internal_error("failed to serialize entity")
    })
}

// ============================================================
// Health Check
// ============================================================

/// Basic health check - returns 200 if the mock backend is running.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// List Handlers
// ============================================================

/// Request body for creating a list.
#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub name: String,
}

async fn create_list<S: SessionStore>(
    State(state): State<Arc<AppState<S>>>,
    JsonBadRequest(body): JsonBadRequest<CreateListRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = state.ids.next();
    let list = List::new(id, body.name);

    state.store.set(&id.to_string(), to_stored(&list)?).await?;

    Ok((StatusCode::CREATED, Json(list)))
}

/// Delete a list (DELETE).
///
/// Removal is unconditional and idempotent: deleting an absent id is a
/// silent no-op. Tasks under the list are NOT cascade-removed; the UI
/// re-queries and filters on its side.
async fn delete_list<S: SessionStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(list_id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    state.store.remove(&list_id.to_string()).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================
// Task Handlers
// ============================================================

/// Request body for creating a task.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub text: String,
}

/// Request body for updating a task.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub completed: bool,
}

async fn create_task<S: SessionStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(list_id): Path<u64>,
    JsonBadRequest(body): JsonBadRequest<CreateTaskRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = state.ids.next();
    let task = Task::new(id, list_id, body.text, state.clock.now_millis());

    state.store.set(&id.to_string(), to_stored(&task)?).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task's completion state (PATCH).
///
/// Merges `completed` from the body and refreshes `touched`; every other
/// field is kept as stored. Responds 201 on success - the UI contract
/// reuses 201 for updates and its tests assert on it.
///
/// A task id absent from the store responds 404 `task_not_found`.
async fn update_task<S: SessionStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(task_id): Path<u64>,
    JsonBadRequest(body): JsonBadRequest<UpdateTaskRequest>,
) -> ApiResult<impl IntoResponse> {
    let key = task_id.to_string();

    let stored = state
        .store
        .get(&key)
        .await?
        .ok_or_else(|| ApiError::task_not_found(format!("task not found: {task_id}")))?;

    let mut task: Task = serde_json::from_value(stored).map_err(|e| {
        error!("Stored payload for task {} is invalid: {}", task_id, e);
        ApiError::internal_error("stored task payload is invalid")
    })?;

    task.completed = body.completed;
    task.touched = state.clock.now_millis();

    state.store.set(&key, to_stored(&task)?).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Delete a task (DELETE).
///
/// Removal is unconditional and idempotent: deleting an absent id is a
/// silent no-op.
async fn delete_task<S: SessionStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(task_id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    state.store.remove(&task_id.to_string()).await?;

    Ok(StatusCode::NO_CONTENT)
}
