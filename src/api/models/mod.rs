//! API request and response data models.
//!
//! This module contains the data structures used for HTTP request
//! deserialization and response serialization. These models define the public
//! API contract.
//!
//! # Design Principles
//!
//! - **Separation of Concerns**: API models are distinct from database models,
//!   allowing independent evolution of API and storage representations
//! - **OpenAPI**: All models are annotated with `utoipa` for automatic API docs
//! - **Compatibility**: Field names and enum spellings match what existing
//!   clients already parse, down to punctuation in status messages
//!
//! # Model Categories
//!
//! - [`users`]: User creation requests and password-free user responses
//! - [`people`]: Catalog person responses
//! - [`planets`]: Catalog planet responses
//! - [`favorites`]: The [`favorites::FavoriteTarget`] reference type and
//!   favorite responses
//! - [`meta`]: Greeting and route-map payloads

pub mod favorites;
pub mod meta;
pub mod people;
pub mod planets;
pub mod users;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic single-message payload, used wherever the API answers with a
/// human-readable status line rather than a resource body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Added to favorites.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
