//! Repository implementations for database access.
//!
//! This module provides repository structs for each entity in the system.
//! Repositories follow a consistent pattern and implement the [`Repository`]
//! trait where the entity supports generic CRUD; [`Favorites`] is a
//! membership-style table and exposes purpose-built operations instead.
//!
//! # Design Pattern
//!
//! Each repository:
//! - Wraps a SQLx connection or transaction
//! - Provides strongly-typed operations
//! - Handles query construction and parameter binding
//! - Returns domain models from [`crate::db::models`]
//!
//! # Available Repositories
//!
//! - [`Users`]: User account storage
//! - [`People`]: Catalog people lookups and seeding
//! - [`Planets`]: Catalog planet lookups and seeding
//! - [`Favorites`]: Per-user favorite rows with atomic add/remove
//!
//! # Common Pattern
//!
//! All repositories follow this usage pattern:
//!
//! ```ignore
//! use holocron::db::handlers::{Repository, Users};
//!
//! async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Users::new(&mut conn);
//!     let users = repo.list().await?;
//!     Ok(())
//! }
//! ```

pub mod favorites;
pub mod people;
pub mod planets;
pub mod repository;
pub mod users;

pub use favorites::Favorites;
pub use people::People;
pub use planets::Planets;
pub use repository::Repository;
pub use users::Users;
