//! Common type definitions shared across the API and database layers.
//!
//! All entity IDs are 64-bit auto-increment integers wrapped in type aliases
//! for readability at call sites:
//!
//! - [`UserId`]: User account identifier
//! - [`PersonId`]: Catalog person identifier
//! - [`PlanetId`]: Catalog planet identifier
//! - [`FavoriteId`]: Favorite row identifier

// Type aliases for IDs
pub type UserId = i64;
pub type PersonId = i64;
pub type PlanetId = i64;
pub type FavoriteId = i64;

/// The user all favorite routes act on behalf of until real authentication
/// lands; created at startup so the foreign key always resolves.
pub const DEFAULT_USER_ID: UserId = 1;
