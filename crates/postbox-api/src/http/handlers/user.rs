//! User RPC handlers.
//!
//! Endpoints:
//! - POST   /api/v1/users      - Create a user
//! - GET    /api/v1/users/{id} - Get a user
//! - DELETE /api/v1/users/{id} - Delete a user
//!
//! Users have no update endpoint; the record is immutable once created.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use postbox_types::user::User;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/users - Create a new user.
///
/// The response carries the server-assigned `id` and creation date.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<User>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let user = state.user_service.create(body).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(user, request_id, elapsed)))
}

/// GET /api/v1/users/{id} - Get a user by ID.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let user = state.user_service.get(&id).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(user, request_id, elapsed)))
}

/// DELETE /api/v1/users/{id} - Delete a user.
///
/// Deleting a missing user still succeeds; the store does not report
/// whether anything was removed.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    state.user_service.delete(&id).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(
        serde_json::json!({}),
        request_id,
        elapsed,
    )))
}
