//! OpenAPI documentation configuration.
//!
//! A single [`ApiDoc`] covers the whole surface. The same document backs the
//! interactive docs at `/docs`, the raw JSON at `/openapi.json`, and the
//! route map served at the root path.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::meta::route_map,
        api::handlers::meta::greeting,
        api::handlers::users::add_user,
        api::handlers::users::list_users,
        api::handlers::users::user_favorites,
        api::handlers::people::list_people,
        api::handlers::people::get_person,
        api::handlers::planets::list_planets,
        api::handlers::planets::get_planet,
        api::handlers::favorites::add_favorite,
        api::handlers::favorites::remove_favorite,
    ),
    components(
        schemas(
            api::models::MessageResponse,
            api::models::meta::GreetingResponse,
            api::models::meta::RouteEntry,
            api::models::users::UserCreate,
            api::models::users::UserResponse,
            api::models::people::PersonResponse,
            api::models::planets::PlanetResponse,
            api::models::favorites::FavoriteTarget,
            api::models::favorites::FavoriteResponse,
        )
    ),
    tags(
        (name = "meta", description = "Route discovery and the greeting endpoint."),
        (name = "users", description = "User accounts and their favorites."),
        (name = "people", description = "Read-only catalog of people."),
        (name = "planets", description = "Read-only catalog of planets."),
        (name = "favorites", description = "Add or remove favorites for the default user.
Favorites reference a catalog entry by `nature` (`people` or `planets`) and its id."),
    ),
    info(
        title = "Holocron API",
        version = "0.1.0",
        description = "A catalog of people and planets with per-user favorites.

## Errors

Failures return a JSON envelope with a single `message` field:

```json
{
  \"message\": \"No person found\"
}
```",
    ),
)]
pub struct ApiDoc;
