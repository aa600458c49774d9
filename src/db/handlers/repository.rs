//! Common repository interface for database operations.

use crate::db::errors::Result;

/// A common interface for repositories that manage storage-level entities.
///
/// Each implementation wraps a database connection and translates between
/// rows and the `*DBRequest` / `*DBResponse` models. Only the operations the
/// API actually performs are part of the trait; there are no update or
/// pagination hooks because no route needs them.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;
    /// The response type returned by operations
    type Response;
    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID, `None` when no row matches
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List all entities, ordered by ID
    async fn list(&mut self) -> Result<Vec<Self::Response>>;
}
