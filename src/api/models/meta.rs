//! API models for the greeting and route-map endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static greeting payload for `GET /user`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GreetingResponse {
    #[schema(example = "Hello, this is your GET /user response")]
    pub msg: String,
}

/// One route in the map served at the root path
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RouteEntry {
    #[schema(example = "/people/{id}")]
    pub path: String,
    #[schema(example = json!(["GET"]))]
    pub methods: Vec<String>,
}
