//! API request/response models for users.

use crate::db::models::users::UserDBResponse;
use crate::types::UserId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// User request models.
//
// `email` and `password` are optional at the serde level so a request missing
// them still deserializes; the handler turns absence into the documented
// 400 response instead of a generic deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserCreate {
    #[schema(example = "luke@rebellion.example")]
    pub email: Option<String>,
    pub password: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

// User response models
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl From<UserDBResponse> for UserResponse {
    fn from(db: UserDBResponse) -> Self {
        Self {
            id: db.id,
            email: db.email,
            description: db.description,
            is_active: db.is_active,
        }
    }
}
