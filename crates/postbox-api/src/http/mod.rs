//! HTTP/RPC layer for Postbox.
//!
//! Axum-based request/response API at `/api/v1/` with CORS and request
//! tracing. The transport stays thin: every route maps to exactly one
//! service call, so there is no multi-step operation to roll back.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
