//! Handlers for the greeting and route-map endpoints.

use crate::api::models::meta::{GreetingResponse, RouteEntry};
use crate::errors::{Error, Result};
use axum::Json;
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/user",
    tag = "meta",
    summary = "Greeting",
    responses(
        (status = 200, description = "Static greeting", body = GreetingResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        msg: "Hello, this is your GET /user response".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    summary = "Route map",
    responses(
        (status = 200, description = "Every route the server answers, with its methods", body = Vec<RouteEntry>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn route_map() -> Result<Json<Vec<RouteEntry>>> {
    // Derive the map from the OpenAPI document so it can never drift from
    // the real router; both are generated from the same path annotations.
    let doc = serde_json::to_value(crate::openapi::ApiDoc::openapi())
        .map_err(|e| Error::Other(e.into()))?;

    let mut routes = Vec::new();
    if let Some(paths) = doc.get("paths").and_then(|p| p.as_object()) {
        for (path, operations) in paths {
            let methods = operations
                .as_object()
                .map(|ops| ops.keys().map(|m| m.to_uppercase()).collect())
                .unwrap_or_default();
            routes.push(RouteEntry {
                path: path.clone(),
                methods,
            });
        }
    }
    routes.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(Json(routes))
}
