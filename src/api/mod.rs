//! HTTP API layer: request handlers and wire models.
//!
//! This module contains everything that speaks HTTP:
//!
//! - [`handlers`]: Axum route handlers, one module per resource
//! - [`models`]: Request/response types that define the JSON contract
//!
//! # Architecture
//!
//! ```text
//! Router (crate::build_router)
//!      |
//!      v
//! api::handlers  -- extract, validate, call repositories
//!      |
//!      v
//! api::models    -- serialize only the public subset of each record
//! ```
//!
//! Handlers never run SQL themselves; they acquire a connection from the
//! shared pool in [`AppState`](crate::AppState), hand it to a repository from
//! [`crate::db::handlers`], and convert the `*DBResponse` into an API model.
//! Failures flow out as [`crate::errors::Error`], which renders the
//! `{"message": ...}` envelope with the right status code.

pub mod handlers;
pub mod models;
