//! Database repository for catalog planets.

use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::planets::{PlanetCreateDBRequest, PlanetDBResponse},
};
use crate::types::PlanetId;
use sqlx::{FromRow, SqliteConnection};
use tracing::instrument;

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub population: Option<i64>,
    pub terrain: Option<String>,
}

impl From<Planet> for PlanetDBResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            population: planet.population,
            terrain: planet.terrain,
        }
    }
}

/// Repository for catalog planets
pub struct Planets<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Planets<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Number of planets in the catalog. Used to decide whether seeding is
    /// needed at startup.
    #[instrument(skip(self), err)]
    pub async fn count(&mut self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM planets")
            .fetch_one(&mut *self.db)
            .await?;

        Ok(count.0)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Planets<'c> {
    type CreateRequest = PlanetCreateDBRequest;
    type Response = PlanetDBResponse;
    type Id = PlanetId;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let planet = sqlx::query_as::<_, Planet>(
            "INSERT INTO planets (name, population, terrain)
             VALUES (?, ?, ?)
             RETURNING id, name, population, terrain",
        )
        .bind(&request.name)
        .bind(request.population)
        .bind(&request.terrain)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(PlanetDBResponse::from(planet))
    }

    #[instrument(skip(self), fields(planet_id = id), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let planet = sqlx::query_as::<_, Planet>(
            "SELECT id, name, population, terrain FROM planets WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(planet.map(PlanetDBResponse::from))
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let planets = sqlx::query_as::<_, Planet>(
            "SELECT id, name, population, terrain FROM planets ORDER BY id",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(planets.into_iter().map(PlanetDBResponse::from).collect())
    }
}
