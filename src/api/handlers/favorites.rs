//! Handlers for favorite add/remove routes.
//!
//! Favorites always belong to [`DEFAULT_USER_ID`] until real authentication
//! exists. Duplicate detection is not a lookup here; the repository's single
//! INSERT/DELETE statements report whether a row changed, and the handlers
//! translate that into the API's status messages.

use crate::api::models::favorites::FavoriteTarget;
use crate::api::models::MessageResponse;
use crate::db::handlers::{Favorites, People, Planets, Repository};
use crate::errors::{Error, Result};
use crate::types::DEFAULT_USER_ID;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqliteConnection;

/// Parse the path segments into a [`FavoriteTarget`] and confirm the
/// referenced catalog row exists.
async fn resolve_target(
    conn: &mut SqliteConnection,
    nature: &str,
    nature_id: i64,
) -> Result<FavoriteTarget> {
    let Some(target) = FavoriteTarget::from_parts(nature, nature_id) else {
        return Err(Error::NotFound {
            message: "Type of item doesn't exist in api".to_string(),
        });
    };

    let (exists, noun) = match target {
        FavoriteTarget::People(id) => {
            (People::new(&mut *conn).get_by_id(id).await?.is_some(), "person")
        }
        FavoriteTarget::Planets(id) => {
            (Planets::new(&mut *conn).get_by_id(id).await?.is_some(), "planet")
        }
    };
    if !exists {
        return Err(Error::NotFound {
            message: format!("No {noun} found with the id provided"),
        });
    }

    Ok(target)
}

#[utoipa::path(
    post,
    path = "/favorite/{nature}/{nature_id}",
    tag = "favorites",
    summary = "Add favorite",
    responses(
        (status = 201, description = "Favorite recorded", body = MessageResponse),
        (status = 400, description = "Favorite already exists"),
        (status = 404, description = "Unknown nature or no catalog row with this ID"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("nature" = String, Path, description = "Kind of catalog entry, `people` or `planets`"),
        ("nature_id" = i64, Path, description = "ID of the referenced catalog entry")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Path((nature, nature_id)): Path<(String, i64)>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let target = resolve_target(&mut pool_conn, &nature, nature_id).await?;

    let mut repo = Favorites::new(&mut pool_conn);
    if repo.add(DEFAULT_USER_ID, target).await? {
        Ok((StatusCode::CREATED, Json(MessageResponse::new("Added to favorites."))))
    } else {
        Err(Error::BadRequest {
            message: "Favorite already exists".to_string(),
        })
    }
}

#[utoipa::path(
    delete,
    path = "/favorite/{nature}/{nature_id}",
    tag = "favorites",
    summary = "Remove favorite",
    responses(
        (status = 200, description = "Favorite removed", body = MessageResponse),
        (status = 400, description = "No such favorite to remove"),
        (status = 404, description = "Unknown nature or no catalog row with this ID"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("nature" = String, Path, description = "Kind of catalog entry, `people` or `planets`"),
        ("nature_id" = i64, Path, description = "ID of the referenced catalog entry")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((nature, nature_id)): Path<(String, i64)>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let target = resolve_target(&mut pool_conn, &nature, nature_id).await?;

    let mut repo = Favorites::new(&mut pool_conn);
    if repo.remove(DEFAULT_USER_ID, target).await? {
        Ok((StatusCode::OK, Json(MessageResponse::new("Favorite deleted."))))
    } else {
        Err(Error::BadRequest {
            message: "Can't delete a favorite that doesn't exist.".to_string(),
        })
    }
}
