//! Handlers for catalog people routes.

use crate::api::models::people::PersonResponse;
use crate::db::handlers::{People, Repository};
use crate::errors::{Error, Result};
use crate::types::PersonId;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    summary = "List people",
    responses(
        (status = 200, description = "All people in the catalog", body = Vec<PersonResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<PersonResponse>>> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = People::new(&mut pool_conn);

    let people = repo.list().await?;
    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "people",
    summary = "Get person",
    responses(
        (status = 200, description = "Person details", body = PersonResponse),
        (status = 404, description = "No person with this ID"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Person ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<PersonId>,
) -> Result<Json<PersonResponse>> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = People::new(&mut pool_conn);

    match repo.get_by_id(id).await? {
        Some(person) => Ok(Json(PersonResponse::from(person))),
        None => Err(Error::NotFound {
            message: "No person found".to_string(),
        }),
    }
}
