//! API models for favorites.
//!
//! The `nature` discriminator from the URL and the referenced row id travel
//! together as a [`FavoriteTarget`]. Handlers and repositories pass the enum
//! around instead of a string/id pair, so an unsupported nature can only be
//! rejected in one place and never reaches a query.

use crate::db::models::favorites::FavoriteDBResponse;
use crate::types::{PersonId, PlanetId, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A reference to the catalog row a favorite points at.
///
/// Serializes to the wire shape clients already expect:
/// `{"nature": "people", "nature_id": 4}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(tag = "nature", content = "nature_id", rename_all = "lowercase")]
pub enum FavoriteTarget {
    People(PersonId),
    Planets(PlanetId),
}

impl FavoriteTarget {
    /// Build a target from a raw nature string and id, as they arrive in the
    /// URL path or come back from the `favorites` table. `None` for any
    /// nature other than `people` or `planets`.
    pub fn from_parts(nature: &str, nature_id: i64) -> Option<Self> {
        match nature {
            "people" => Some(Self::People(nature_id)),
            "planets" => Some(Self::Planets(nature_id)),
            _ => None,
        }
    }

    /// The discriminator as stored in the `nature` column
    pub fn nature(&self) -> &'static str {
        match self {
            Self::People(_) => "people",
            Self::Planets(_) => "planets",
        }
    }

    /// The referenced row id
    pub fn nature_id(&self) -> i64 {
        match self {
            Self::People(id) => *id,
            Self::Planets(id) => *id,
        }
    }
}

/// A favorite as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteResponse {
    pub user_id: UserId,
    #[serde(flatten)]
    pub target: FavoriteTarget,
}

impl From<FavoriteDBResponse> for FavoriteResponse {
    fn from(db: FavoriteDBResponse) -> Self {
        Self {
            user_id: db.user_id,
            target: db.target,
        }
    }
}
