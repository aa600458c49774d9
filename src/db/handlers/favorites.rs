//! Database repository for per-user favorites.

use crate::api::models::favorites::FavoriteTarget;
use crate::db::{
    errors::{DbError, Result},
    models::favorites::FavoriteDBResponse,
};
use crate::types::{FavoriteId, UserId};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection};
use tracing::instrument;

// Database entity model. `nature` and `nature_id` live as separate columns;
// they fold back into a FavoriteTarget on the way out.
#[derive(Debug, Clone, FromRow)]
struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub nature: String,
    pub nature_id: i64,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<Favorite> for FavoriteDBResponse {
    type Error = DbError;

    fn try_from(favorite: Favorite) -> Result<Self> {
        let target = FavoriteTarget::from_parts(&favorite.nature, favorite.nature_id)
            .ok_or_else(|| {
                DbError::Other(anyhow::anyhow!(
                    "favorites row {} has unrecognized nature {:?}",
                    favorite.id,
                    favorite.nature
                ))
            })?;

        Ok(Self {
            id: favorite.id,
            user_id: favorite.user_id,
            target,
            created_at: favorite.created_at,
        })
    }
}

/// Repository for favorites
///
/// Favorites are a membership table keyed by `(user_id, nature, nature_id)`,
/// so instead of the generic [`Repository`](super::Repository) surface this
/// exposes atomic add/remove operations. Both are single statements that
/// lean on the UNIQUE constraint; there is no read-then-write window for
/// concurrent requests to race through.
pub struct Favorites<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Favorites<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Record a favorite for a user.
    ///
    /// Returns `true` when a row was inserted and `false` when the favorite
    /// already existed. A missing user surfaces as [`DbError::NotFound`] via
    /// the foreign key on `user_id`.
    #[instrument(
        skip(self),
        fields(user_id = user_id, nature = target.nature(), nature_id = target.nature_id()),
        err
    )]
    pub async fn add(&mut self, user_id: UserId, target: FavoriteTarget) -> Result<bool> {
        match sqlx::query(
            "INSERT INTO favorites (user_id, nature, nature_id) VALUES (?, ?, ?)
             ON CONFLICT (user_id, nature, nature_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(target.nature())
        .bind(target.nature_id())
        .execute(&mut *self.db)
        .await
        {
            Ok(result) => Ok(result.rows_affected() > 0),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                // The owning user doesn't exist
                Err(DbError::NotFound)
            }
            Err(e) => Err(DbError::from(e)),
        }
    }

    /// Remove a favorite. Returns `true` when a row was deleted and `false`
    /// when no matching favorite existed.
    #[instrument(
        skip(self),
        fields(user_id = user_id, nature = target.nature(), nature_id = target.nature_id()),
        err
    )]
    pub async fn remove(&mut self, user_id: UserId, target: FavoriteTarget) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM favorites WHERE user_id = ? AND nature = ? AND nature_id = ?",
        )
        .bind(user_id)
        .bind(target.nature())
        .bind(target.nature_id())
        .execute(&mut *self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All favorites owned by the given user, oldest first.
    #[instrument(skip(self), fields(user_id = user_id), err)]
    pub async fn list_for_user(&mut self, user_id: UserId) -> Result<Vec<FavoriteDBResponse>> {
        let favorites = sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, nature, nature_id, created_at
             FROM favorites WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&mut *self.db)
        .await?;

        favorites.into_iter().map(FavoriteDBResponse::try_from).collect()
    }
}
