//! Database models for favorites.

use crate::api::models::favorites::FavoriteTarget;
use crate::types::{FavoriteId, UserId};
use chrono::{DateTime, Utc};

/// Database response for a favorite
///
/// The `nature` and `nature_id` columns come back folded into a
/// [`FavoriteTarget`], so everything above the repository layer works with a
/// typed reference instead of a raw string/id pair.
#[derive(Debug, Clone)]
pub struct FavoriteDBResponse {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub target: FavoriteTarget,
    pub created_at: DateTime<Utc>,
}
