//! Handlers for catalog planet routes.

use crate::api::models::planets::PlanetResponse;
use crate::db::handlers::{Planets, Repository};
use crate::errors::{Error, Result};
use crate::types::PlanetId;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

#[utoipa::path(
    get,
    path = "/planets",
    tag = "planets",
    summary = "List planets",
    responses(
        (status = 200, description = "All planets in the catalog", body = Vec<PlanetResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<PlanetResponse>>> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Planets::new(&mut pool_conn);

    let planets = repo.list().await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = "planets",
    summary = "Get planet",
    responses(
        (status = 200, description = "Planet details", body = PlanetResponse),
        (status = 404, description = "No planet with this ID"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Planet ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<PlanetId>,
) -> Result<Json<PlanetResponse>> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Planets::new(&mut pool_conn);

    match repo.get_by_id(id).await? {
        Some(planet) => Ok(Json(PlanetResponse::from(planet))),
        None => Err(Error::NotFound {
            message: "No planet found".to_string(),
        }),
    }
}
