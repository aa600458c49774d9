//! HTTP request handlers for all API endpoints.
//!
//! This module contains Axum route handlers organized by resource type.
//! Each handler is responsible for:
//! - Request validation and deserialization
//! - Business logic execution via database repositories
//! - Response serialization
//!
//! # Handler Modules
//!
//! - [`users`]: User creation, listing, and per-user favorites lookup
//! - [`people`]: Catalog people reads
//! - [`planets`]: Catalog planet reads
//! - [`favorites`]: Favorite add/remove for the default user
//! - [`meta`]: Greeting and the route map at the root path
//!
//! # Error Handling
//!
//! Handlers return [`crate::errors::Error`] which automatically converts to
//! appropriate HTTP status codes and `{"message": ...}` JSON error responses.

pub mod favorites;
pub mod meta;
pub mod people;
pub mod planets;
pub mod users;
