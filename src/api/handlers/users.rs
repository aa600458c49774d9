//! Handlers for user routes.

use crate::api::models::favorites::FavoriteResponse;
use crate::api::models::users::{UserCreate, UserResponse};
use crate::api::models::MessageResponse;
use crate::auth::password::hash_string;
use crate::db::handlers::{Favorites, Repository, Users};
use crate::db::models::users::UserCreateDBRequest;
use crate::errors::{Error, Result};
use crate::types::UserId;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    post,
    path = "/add_user",
    tag = "users",
    summary = "Create user",
    request_body = UserCreate,
    responses(
        (status = 201, description = "User created successfully", body = MessageResponse),
        (status = 400, description = "Email or password missing"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn add_user(
    State(state): State<AppState>,
    Json(create): Json<UserCreate>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    // Both credentials must be present; the serde model keeps them optional
    // so this check owns the failure message instead of the deserializer.
    let (Some(email), Some(password)) = (create.email, create.password) else {
        return Err(Error::BadRequest {
            message: "Password or Email needed".to_string(),
        });
    };

    // Hash the password on a blocking thread to avoid blocking async runtime
    let password_hash = tokio::task::spawn_blocking(move || hash_string(&password))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password hashing task: {e}"),
        })??;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Users::new(&mut pool_conn);

    repo.create(&UserCreateDBRequest {
        email,
        password_hash,
        description: create.description,
        is_active: create.is_active,
    })
    .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("User created"))))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    summary = "List users",
    responses(
        (status = 200, description = "All users, passwords excluded", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Users::new(&mut pool_conn);

    let users = repo.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/user/{id}/favorites",
    tag = "users",
    summary = "List a user's favorites",
    responses(
        (status = 200, description = "Favorites owned by the user", body = Vec<FavoriteResponse>),
        (status = 404, description = "No user with this ID"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "User ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn user_favorites(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<Vec<FavoriteResponse>>> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    // The user must exist before we answer; an empty list for an unknown id
    // would be indistinguishable from a user with no favorites.
    let user = {
        let mut users = Users::new(&mut pool_conn);
        users.get_by_id(id).await?
    };
    if user.is_none() {
        return Err(Error::NotFound {
            message: "No user found with the id provided".to_string(),
        });
    }

    let mut favorites = Favorites::new(&mut pool_conn);
    let rows = favorites.list_for_user(id).await?;
    Ok(Json(rows.into_iter().map(FavoriteResponse::from).collect()))
}
