//! API response models for catalog people.

use crate::db::models::people::PersonDBResponse;
use crate::types::PersonId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonResponse {
    pub id: PersonId,
    #[schema(example = "Luke Skywalker")]
    pub name: String,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

impl From<PersonDBResponse> for PersonResponse {
    fn from(db: PersonDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            gender: db.gender,
            hair_color: db.hair_color,
            eye_color: db.eye_color,
        }
    }
}
