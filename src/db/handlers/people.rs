//! Database repository for catalog people.

use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::people::{PersonCreateDBRequest, PersonDBResponse},
};
use crate::types::PersonId;
use sqlx::{FromRow, SqliteConnection};
use tracing::instrument;

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct Person {
    pub id: PersonId,
    pub name: String,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

impl From<Person> for PersonDBResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            gender: person.gender,
            hair_color: person.hair_color,
            eye_color: person.eye_color,
        }
    }
}

/// Repository for catalog people
pub struct People<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> People<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Number of people in the catalog. Used to decide whether seeding is
    /// needed at startup.
    #[instrument(skip(self), err)]
    pub async fn count(&mut self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM people")
            .fetch_one(&mut *self.db)
            .await?;

        Ok(count.0)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for People<'c> {
    type CreateRequest = PersonCreateDBRequest;
    type Response = PersonDBResponse;
    type Id = PersonId;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let person = sqlx::query_as::<_, Person>(
            "INSERT INTO people (name, gender, hair_color, eye_color)
             VALUES (?, ?, ?, ?)
             RETURNING id, name, gender, hair_color, eye_color",
        )
        .bind(&request.name)
        .bind(&request.gender)
        .bind(&request.hair_color)
        .bind(&request.eye_color)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(PersonDBResponse::from(person))
    }

    #[instrument(skip(self), fields(person_id = id), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let person = sqlx::query_as::<_, Person>(
            "SELECT id, name, gender, hair_color, eye_color FROM people WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(person.map(PersonDBResponse::from))
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let people = sqlx::query_as::<_, Person>(
            "SELECT id, name, gender, hair_color, eye_color FROM people ORDER BY id",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(people.into_iter().map(PersonDBResponse::from).collect())
    }
}
