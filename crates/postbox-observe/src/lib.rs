//! Observability setup for Postbox.
//!
//! Structured logging via `tracing`, with optional OpenTelemetry span
//! export for local development.

pub mod tracing_setup;
