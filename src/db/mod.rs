//! Database layer for the catalog and favorites store.
//!
//! This module provides the data access layer, organized into:
//!
//! - [`handlers`]: Repository implementations that execute queries
//! - [`models`]: Row-shaped request/response types for the repositories
//! - [`errors`]: Database error types and classification
//!
//! # Architecture
//!
//! The database layer follows the repository pattern:
//!
//! ```text
//! API handlers
//!      |
//!      v
//! Repositories (db::handlers)  -- SQL lives here
//!      |
//!      v
//! SQLite via sqlx
//! ```
//!
//! Repositories borrow a connection (or transaction) rather than owning a
//! pool, so callers decide transaction boundaries. Constraint violations are
//! classified into [`errors::DbError`] variants close to the driver, letting
//! the API layer map them onto HTTP statuses without string matching.

pub mod errors;
pub mod handlers;
pub mod models;
