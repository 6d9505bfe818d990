//! Thread RPC handlers.
//!
//! Endpoints:
//! - POST /api/v1/threads        - Create a thread
//! - POST /api/v1/threads/query  - Query threads (pagination + text search)
//! - GET  /api/v1/threads/{id}   - Get a thread
//! - PUT  /api/v1/threads/{id}   - Update (replace) a thread

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use postbox_types::thread::{MessageThread, ThreadPage, ThreadQuery};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/threads - Create a new thread.
///
/// The response carries the server-assigned `id` and first-message date.
pub async fn create_thread(
    State(state): State<AppState>,
    Json(body): Json<MessageThread>,
) -> Result<Json<ApiResponse<MessageThread>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let thread = state.thread_service.create(body).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(thread, request_id, elapsed)))
}

/// POST /api/v1/threads/query - Query threads with pagination and optional
/// full-text search.
pub async fn query_threads(
    State(state): State<AppState>,
    Json(body): Json<ThreadQuery>,
) -> Result<Json<ApiResponse<ThreadPage>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let page = state.thread_service.query(&body).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(page, request_id, elapsed)))
}

/// GET /api/v1/threads/{id} - Get a thread by ID.
pub async fn get_thread(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageThread>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let thread = state.thread_service.get(&id).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(thread, request_id, elapsed)))
}

/// PUT /api/v1/threads/{id} - Replace a thread's document.
///
/// The response carries the server-assigned last-message date.
pub async fn update_thread(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<MessageThread>,
) -> Result<Json<ApiResponse<MessageThread>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let thread = state.thread_service.update(&id, body).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(thread, request_id, elapsed)))
}
