//! Database models for catalog planets.

use crate::types::PlanetId;

/// Database request to insert a planet
///
/// The public API exposes no create route for planets; this is used by the
/// startup seed and by tests.
#[derive(Debug, Clone)]
pub struct PlanetCreateDBRequest {
    pub name: String,
    pub population: Option<i64>,
    pub terrain: Option<String>,
}

/// Database response for a planet
#[derive(Debug, Clone)]
pub struct PlanetDBResponse {
    pub id: PlanetId,
    pub name: String,
    pub population: Option<i64>,
    pub terrain: Option<String>,
}
