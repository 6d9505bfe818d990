//! Business logic for Postbox.
//!
//! Defines the repository ports implemented by postbox-infra and the domain
//! services that own server-side ID/timestamp assignment, boundary
//! validation, and repository-error translation.

pub mod repository;
pub mod service;
