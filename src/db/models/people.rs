//! Database models for catalog people.

use crate::types::PersonId;

/// Database request to insert a person
///
/// The public API exposes no create route for people; this is used by the
/// startup seed and by tests.
#[derive(Debug, Clone)]
pub struct PersonCreateDBRequest {
    pub name: String,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

/// Database response for a person
#[derive(Debug, Clone)]
pub struct PersonDBResponse {
    pub id: PersonId,
    pub name: String,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}
