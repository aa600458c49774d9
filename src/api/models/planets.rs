//! API response models for catalog planets.

use crate::db::models::planets::PlanetDBResponse;
use crate::types::PlanetId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanetResponse {
    pub id: PlanetId,
    #[schema(example = "Tatooine")]
    pub name: String,
    /// Population count, absent when unknown
    pub population: Option<i64>,
    pub terrain: Option<String>,
}

impl From<PlanetDBResponse> for PlanetResponse {
    fn from(db: PlanetDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            population: db.population,
            terrain: db.terrain,
        }
    }
}
