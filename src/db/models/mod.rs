//! Database record models matching table schemas.
//!
//! Each struct here corresponds to a table row (or the subset of columns a
//! repository works with). Database models are distinct from API models so
//! storage and API representations can evolve independently; repositories
//! return `*DBResponse` types which the API layer converts with `From`.
//!
//! - [`users`]: User accounts
//! - [`people`]: Catalog people
//! - [`planets`]: Catalog planets
//! - [`favorites`]: Per-user favorite rows

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
