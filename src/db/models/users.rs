//! Database models for user accounts.

use crate::types::UserId;
use chrono::{DateTime, Utc};

/// Database request to insert a new user
///
/// Carries a password hash, never the plaintext password. Hashing happens in
/// the API layer before the request reaches the repository.
#[derive(Debug, Clone)]
pub struct UserCreateDBRequest {
    pub email: String,
    pub password_hash: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Database response for a user
///
/// The password hash deliberately does not appear here; nothing above the
/// repository layer ever sees it.
#[derive(Debug, Clone)]
pub struct UserDBResponse {
    pub id: UserId,
    pub email: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
