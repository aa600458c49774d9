//! # Holocron
//!
//! A small HTTP/JSON service exposing a catalog of people and planets,
//! user accounts, and per-user favorites, backed by SQLite.
//!
//! ## Architecture
//!
//! Requests pass through two layers on their way to the database:
//!
//! ```text
//! api::handlers ── HTTP routes, wire models, OpenAPI annotations
//!       │
//! db::handlers ─── one repository per table, DB request/response models
//!       │
//!     SQLite ───── single file (or in-memory) database via sqlx
//! ```
//!
//! [`api`] owns the HTTP surface and [`db`] owns persistence; the two only
//! talk through the repository types and their models. [`Application`] ties
//! everything together: it connects the pool, runs migrations, creates the
//! startup rows, and serves the router assembled by [`build_router`].
//!
//! ## Startup
//!
//! [`Application::new`] prepares everything a running server needs:
//!
//! 1. Connect to the configured SQLite database, creating the file on first
//!    boot.
//! 2. Apply the embedded migrations.
//! 3. Ensure the default user exists. Favorites are always recorded against
//!    [`types::DEFAULT_USER_ID`], so the server will not start without that
//!    row.
//! 4. Seed the people and planets tables when they are empty, unless
//!    `seed_catalog` is disabled.
//!
//! Configuration comes from a YAML file plus `HOLOCRON_`-prefixed environment
//! variables, with bare `DATABASE_URL` and `PORT` also honored. See
//! [`config`] for the full story.

use axum::{
    Json, Router,
    http::HeaderValue,
    routing::{get, post},
};
use bon::Builder;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod openapi;
pub mod telemetry;
#[cfg(test)]
pub mod test_utils;
pub mod types;

pub use config::Config;

use crate::{
    auth::password::hash_string,
    config::CorsOrigin,
    db::{
        handlers::{People, Planets, Repository, Users},
        models::{
            people::PersonCreateDBRequest, planets::PlanetCreateDBRequest,
            users::UserCreateDBRequest,
        },
    },
    openapi::ApiDoc,
    types::{DEFAULT_USER_ID, UserId},
};

/// Shared state available to all request handlers.
#[derive(Clone, Builder)]
pub struct AppState {
    /// Connection pool for the SQLite database
    pub db: SqlitePool,
    /// Application configuration
    pub config: Config,
}

/// Embedded database migrations, shared with tests that prepare their own
/// throwaway databases.
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Ensure the user favorites are recorded against exists.
///
/// The email and password come from configuration. When the user already
/// exists its stored hash is refreshed, so changing `default_user_password`
/// takes effect on the next restart.
#[instrument(skip_all)]
pub async fn create_default_user(
    email: &str,
    password: &str,
    db: &SqlitePool,
) -> anyhow::Result<UserId> {
    let mut tx = db.begin().await?;
    let password_hash = hash_string(password)?;

    let existing = Users::new(&mut tx).get_user_by_email(email).await?;
    if let Some(user) = existing {
        sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(&password_hash)
            .bind(user.id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        debug!(user_id = user.id, "Default user already exists");
        return Ok(user.id);
    }

    let created = Users::new(&mut tx)
        .create(&UserCreateDBRequest {
            email: email.to_string(),
            password_hash,
            description: None,
            is_active: true,
        })
        .await?;
    tx.commit().await?;

    info!(user_id = created.id, email, "Created default user");
    Ok(created.id)
}

struct SeedPerson {
    name: &'static str,
    gender: Option<&'static str>,
    hair_color: Option<&'static str>,
    eye_color: Option<&'static str>,
}

const SEED_PEOPLE: &[SeedPerson] = &[
    SeedPerson {
        name: "Luke Skywalker",
        gender: Some("male"),
        hair_color: Some("blond"),
        eye_color: Some("blue"),
    },
    SeedPerson {
        name: "Leia Organa",
        gender: Some("female"),
        hair_color: Some("brown"),
        eye_color: Some("brown"),
    },
    SeedPerson {
        name: "Darth Vader",
        gender: Some("male"),
        hair_color: Some("none"),
        eye_color: Some("yellow"),
    },
    SeedPerson {
        name: "Obi-Wan Kenobi",
        gender: Some("male"),
        hair_color: Some("auburn, white"),
        eye_color: Some("blue-gray"),
    },
    SeedPerson {
        name: "Yoda",
        gender: Some("male"),
        hair_color: Some("white"),
        eye_color: Some("brown"),
    },
    SeedPerson {
        name: "R2-D2",
        gender: Some("n/a"),
        hair_color: Some("n/a"),
        eye_color: Some("red"),
    },
    SeedPerson {
        name: "Han Solo",
        gender: Some("male"),
        hair_color: Some("brown"),
        eye_color: Some("brown"),
    },
    SeedPerson {
        name: "Chewbacca",
        gender: Some("male"),
        hair_color: Some("brown"),
        eye_color: Some("blue"),
    },
];

struct SeedPlanet {
    name: &'static str,
    population: Option<i64>,
    terrain: Option<&'static str>,
}

const SEED_PLANETS: &[SeedPlanet] = &[
    SeedPlanet {
        name: "Tatooine",
        population: Some(200_000),
        terrain: Some("desert"),
    },
    SeedPlanet {
        name: "Alderaan",
        population: Some(2_000_000_000),
        terrain: Some("grasslands, mountains"),
    },
    SeedPlanet {
        name: "Yavin IV",
        population: Some(1_000),
        terrain: Some("jungle, rainforests"),
    },
    SeedPlanet {
        name: "Hoth",
        population: None,
        terrain: Some("tundra, ice caves, mountain ranges"),
    },
    SeedPlanet {
        name: "Dagobah",
        population: None,
        terrain: Some("swamp, jungles"),
    },
    SeedPlanet {
        name: "Bespin",
        population: Some(6_000_000),
        terrain: Some("gas giant"),
    },
    SeedPlanet {
        name: "Endor",
        population: Some(30_000_000),
        terrain: Some("forests, mountains, lakes"),
    },
    SeedPlanet {
        name: "Naboo",
        population: Some(4_500_000_000),
        terrain: Some("grassy hills, swamps, forests, mountains"),
    },
    SeedPlanet {
        name: "Coruscant",
        population: Some(1_000_000_000_000),
        terrain: Some("cityscape, mountains"),
    },
    SeedPlanet {
        name: "Kamino",
        population: Some(1_000_000_000),
        terrain: Some("ocean"),
    },
];

/// Populate the people and planets tables on first boot.
///
/// Each table is only seeded while it is empty, so rows added or edited by an
/// operator survive restarts. Both tables are filled inside one transaction.
#[instrument(skip_all)]
pub async fn seed_database(db: &SqlitePool) -> anyhow::Result<()> {
    let mut tx = db.begin().await?;

    {
        let mut people = People::new(&mut tx);
        if people.count().await? == 0 {
            for person in SEED_PEOPLE {
                people
                    .create(&PersonCreateDBRequest {
                        name: person.name.to_string(),
                        gender: person.gender.map(str::to_string),
                        hair_color: person.hair_color.map(str::to_string),
                        eye_color: person.eye_color.map(str::to_string),
                    })
                    .await?;
            }
            info!(count = SEED_PEOPLE.len(), "Seeded people catalog");
        } else {
            debug!("People table already populated, skipping seed");
        }
    }

    {
        let mut planets = Planets::new(&mut tx);
        if planets.count().await? == 0 {
            for planet in SEED_PLANETS {
                planets
                    .create(&PlanetCreateDBRequest {
                        name: planet.name.to_string(),
                        population: planet.population,
                        terrain: planet.terrain.map(str::to_string),
                    })
                    .await?;
            }
            info!(count = SEED_PLANETS.len(), "Seeded planets catalog");
        } else {
            debug!("Planets table already populated, skipping seed");
        }
    }

    tx.commit().await?;
    Ok(())
}

/// Open the connection pool described by the configuration.
///
/// The database file is created on first boot so a bare `cargo run` works
/// without any manual setup.
async fn create_pool(config: &Config) -> anyhow::Result<SqlitePool> {
    let options = config
        .database
        .url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Run migrations and create the rows every boot depends on.
///
/// Shared by the normal connect path and by tests that hand their own pool to
/// [`Application::new_with_pool`].
#[instrument(skip_all)]
pub async fn setup_database(pool: &SqlitePool, config: &Config) -> anyhow::Result<()> {
    migrator().run(pool).await?;

    let user_id = create_default_user(
        &config.default_user_email,
        &config.default_user_password,
        pool,
    )
    .await?;
    if user_id != DEFAULT_USER_ID {
        warn!(
            user_id,
            expected = DEFAULT_USER_ID,
            "Default user id differs from the id favorites are recorded against"
        );
    }

    if config.seed_catalog {
        seed_database(pool).await?;
    }

    Ok(())
}

/// Build the CORS layer from the configured origins.
///
/// A `"*"` entry anywhere in the list selects the fully permissive mode;
/// otherwise only the listed origins are allowed.
pub fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let wildcard = config
        .cors
        .allowed_origins
        .iter()
        .any(|origin| matches!(origin, CorsOrigin::Wildcard));

    let layer = if wildcard {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let mut origins = Vec::new();
        for origin in &config.cors.allowed_origins {
            if let CorsOrigin::Origin(value) = origin {
                origins.push(value.parse::<HeaderValue>()?);
            }
        }
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Ok(layer)
}

/// Assemble the full router: every API route, the OpenAPI endpoints, CORS,
/// and request tracing.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let cors_layer = create_cors_layer(&state.config)?;

    let router = Router::new()
        .route("/", get(api::handlers::meta::route_map))
        .route("/user", get(api::handlers::meta::greeting))
        .route("/add_user", post(api::handlers::users::add_user))
        .route("/users", get(api::handlers::users::list_users))
        .route(
            "/user/{id}/favorites",
            get(api::handlers::users::user_favorites),
        )
        .route("/people", get(api::handlers::people::list_people))
        .route("/people/{id}", get(api::handlers::people::get_person))
        .route("/planets", get(api::handlers::planets::list_planets))
        .route("/planets/{id}", get(api::handlers::planets::get_planet))
        .route(
            "/favorite/{nature}/{nature_id}",
            post(api::handlers::favorites::add_favorite)
                .delete(api::handlers::favorites::remove_favorite),
        )
        .route("/healthz", get(|| async { "OK" }))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let router = router.layer(cors_layer).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// A fully prepared application: router plus the resources it owns.
pub struct Application {
    router: Router,
    config: Config,
    pool: SqlitePool,
}

impl Application {
    /// Connect to the database, prepare it, and assemble the router.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_pool(config, None).await
    }

    /// Like [`Application::new`], but reuse an existing pool when one is
    /// given. Tests hand their in-memory database in here.
    pub async fn new_with_pool(config: Config, pool: Option<SqlitePool>) -> anyhow::Result<Self> {
        let pool = match pool {
            Some(pool) => pool,
            None => create_pool(&config).await?,
        };

        setup_database(&pool, &config).await?;

        let app_state = AppState::builder()
            .db(pool.clone())
            .config(config.clone())
            .build();
        let router = build_router(app_state)?;

        Ok(Self {
            router,
            config,
            pool,
        })
    }

    /// Consume the application and wrap its router in a test server.
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Serve until `shutdown` resolves, then drain the connection pool.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.bind_address()).await?;
        info!(
            "Listening on http://{}, interactive docs at /docs",
            listener.local_addr()?
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped, closing database connections");
        self.pool.close().await;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::auth::password::verify_string;
    use crate::test_utils::{create_test_app, create_test_config, create_test_pool};
    use axum::http::{StatusCode, header};
    use serde_json::{Value, json};

    #[test_log::test(tokio::test)]
    async fn test_healthz() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server.get("/healthz").await;
        response.assert_status_ok();
        response.assert_text("OK");
    }

    #[test_log::test(tokio::test)]
    async fn test_greeting() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server.get("/user").await;
        response.assert_status_ok();
        response.assert_json(&json!({"msg": "Hello, this is your GET /user response"}));
    }

    #[test_log::test(tokio::test)]
    async fn test_route_map_lists_every_route() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server.get("/").await;
        response.assert_status_ok();

        let routes: Value = response.json();
        let routes = routes.as_array().expect("route map is an array");
        let paths: Vec<&str> = routes
            .iter()
            .map(|route| route["path"].as_str().expect("path is a string"))
            .collect();

        for expected in [
            "/",
            "/user",
            "/users",
            "/add_user",
            "/user/{id}/favorites",
            "/people",
            "/people/{id}",
            "/planets",
            "/planets/{id}",
            "/favorite/{nature}/{nature_id}",
        ] {
            assert!(paths.contains(&expected), "route map is missing {expected}");
        }

        let favorite = routes
            .iter()
            .find(|route| route["path"] == "/favorite/{nature}/{nature_id}")
            .expect("favorite route present");
        let methods = favorite["methods"].as_array().expect("methods array");
        assert!(methods.contains(&json!("POST")));
        assert!(methods.contains(&json!("DELETE")));
    }

    #[test_log::test(tokio::test)]
    async fn test_openapi_json_and_docs_are_served() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server.get("/openapi.json").await;
        response.assert_status_ok();
        let doc: Value = response.json();
        assert_eq!(doc["info"]["title"], "Holocron API");
        assert!(doc["paths"]["/add_user"]["post"].is_object());

        let response = server.get("/docs").await;
        response.assert_status_ok();
    }

    #[test_log::test(tokio::test)]
    async fn test_add_user_and_listing() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server
            .post("/add_user")
            .json(&json!({
                "email": "leia@rebellion.example",
                "password": "alderaan",
                "description": "General",
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({"message": "User created"}));

        let response = server.get("/users").await;
        response.assert_status_ok();

        let users: Value = response.json();
        let users = users.as_array().expect("users listing is an array");
        // The default user is created at startup, so two rows in total.
        assert_eq!(users.len(), 2);
        assert_eq!(users[0]["email"], "user1@holocron.local");

        let leia = users
            .iter()
            .find(|user| user["email"] == "leia@rebellion.example")
            .expect("created user is listed");
        assert_eq!(leia["description"], "General");
        assert_eq!(leia["is_active"], true);
        assert!(leia.get("password").is_none());
        assert!(leia.get("password_hash").is_none());
    }

    #[test_log::test(tokio::test)]
    async fn test_add_user_requires_email_and_password() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        for body in [
            json!({}),
            json!({"email": "lando@cloudcity.example"}),
            json!({"password": "secret"}),
        ] {
            let response = server.post("/add_user").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({"message": "Password or Email needed"}));
        }
    }

    // Hashing runs on the blocking pool, so user creation must complete even
    // when the runtime has a single worker thread and requests arrive together.
    #[test_log::test(tokio::test(flavor = "current_thread"))]
    async fn test_concurrent_user_creation() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let (luke, han, lando) = tokio::join!(
            async {
                server
                    .post("/add_user")
                    .json(&json!({"email": "luke@rebellion.example", "password": "dagobah"}))
                    .await
            },
            async {
                server
                    .post("/add_user")
                    .json(&json!({"email": "han@falcon.example", "password": "kessel"}))
                    .await
            },
            async {
                server
                    .post("/add_user")
                    .json(&json!({"email": "lando@cloudcity.example", "password": "sabacc"}))
                    .await
            },
        );
        luke.assert_status(StatusCode::CREATED);
        han.assert_status(StatusCode::CREATED);
        lando.assert_status(StatusCode::CREATED);

        let response = server.get("/users").await;
        let users: Value = response.json();
        // Three created users plus the default user
        assert_eq!(users.as_array().expect("users array").len(), 4);
    }

    #[test_log::test(tokio::test)]
    async fn test_add_user_rejects_duplicate_email() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let body = json!({"email": "biggs@academy.example", "password": "red3"});

        let response = server.post("/add_user").json(&body).await;
        response.assert_status(StatusCode::CREATED);

        let response = server.post("/add_user").json(&body).await;
        response.assert_status(StatusCode::CONFLICT);
        response.assert_json(&json!({"message": "User with this email already exists"}));
    }

    #[test_log::test(tokio::test)]
    async fn test_people_catalog() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server.get("/people").await;
        response.assert_status_ok();
        let people: Value = response.json();
        let people = people.as_array().expect("people listing is an array");
        assert_eq!(people.len(), 8);
        assert_eq!(people[0]["id"], 1);
        assert_eq!(people[0]["name"], "Luke Skywalker");

        let response = server.get("/people/3").await;
        response.assert_status_ok();
        let vader: Value = response.json();
        assert_eq!(vader["name"], "Darth Vader");
        assert_eq!(vader["eye_color"], "yellow");

        let response = server.get("/people/999").await;
        response.assert_status_not_found();
        response.assert_json(&json!({"message": "No person found"}));
    }

    #[test_log::test(tokio::test)]
    async fn test_planets_catalog() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server.get("/planets").await;
        response.assert_status_ok();
        let planets: Value = response.json();
        let planets = planets.as_array().expect("planets listing is an array");
        assert_eq!(planets.len(), 10);
        assert_eq!(planets[0]["name"], "Tatooine");
        assert_eq!(planets[0]["population"], 200_000);

        // Hoth has an unknown population, which must survive as null.
        let response = server.get("/planets/4").await;
        response.assert_status_ok();
        let hoth: Value = response.json();
        assert_eq!(hoth["name"], "Hoth");
        assert!(hoth["population"].is_null());

        let response = server.get("/planets/999").await;
        response.assert_status_not_found();
        response.assert_json(&json!({"message": "No planet found"}));
    }

    #[test_log::test(tokio::test)]
    async fn test_favorite_lifecycle() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server.post("/favorite/people/1").await;
        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({"message": "Added to favorites."}));

        let response = server.post("/favorite/people/1").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({"message": "Favorite already exists"}));

        let response = server.get("/user/1/favorites").await;
        response.assert_status_ok();
        response.assert_json(&json!([
            {"user_id": 1, "nature": "people", "nature_id": 1}
        ]));

        let response = server.delete("/favorite/people/1").await;
        response.assert_status_ok();
        response.assert_json(&json!({"message": "Favorite deleted."}));

        let response = server.delete("/favorite/people/1").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({"message": "Can't delete a favorite that doesn't exist."}));

        let response = server.get("/user/1/favorites").await;
        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[test_log::test(tokio::test)]
    async fn test_favorites_span_both_natures() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server.post("/favorite/people/2").await;
        response.assert_status(StatusCode::CREATED);
        let response = server.post("/favorite/planets/2").await;
        response.assert_status(StatusCode::CREATED);

        let response = server.get("/user/1/favorites").await;
        response.assert_status_ok();
        response.assert_json(&json!([
            {"user_id": 1, "nature": "people", "nature_id": 2},
            {"user_id": 1, "nature": "planets", "nature_id": 2}
        ]));
    }

    #[test_log::test(tokio::test)]
    async fn test_favorite_rejects_unknown_nature() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let expected = json!({"message": "Type of item doesn't exist in api"});

        let response = server.post("/favorite/starships/1").await;
        response.assert_status_not_found();
        response.assert_json(&expected);

        let response = server.delete("/favorite/starships/1").await;
        response.assert_status_not_found();
        response.assert_json(&expected);

        // Natures are lowercase only.
        let response = server.post("/favorite/People/1").await;
        response.assert_status_not_found();
        response.assert_json(&expected);
    }

    #[test_log::test(tokio::test)]
    async fn test_favorite_requires_existing_catalog_row() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server.post("/favorite/people/999").await;
        response.assert_status_not_found();
        response.assert_json(&json!({"message": "No person found with the id provided"}));

        let response = server.delete("/favorite/planets/999").await;
        response.assert_status_not_found();
        response.assert_json(&json!({"message": "No planet found with the id provided"}));
    }

    #[test_log::test(tokio::test)]
    async fn test_favorites_listing_requires_existing_user() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server.get("/user/999/favorites").await;
        response.assert_status_not_found();
        response.assert_json(&json!({"message": "No user found with the id provided"}));

        // A user that exists but has no favorites gets an empty list, even
        // while the default user has favorites of their own.
        let response = server.post("/favorite/people/1").await;
        response.assert_status(StatusCode::CREATED);

        let response = server
            .post("/add_user")
            .json(&json!({"email": "wedge@rogue.example", "password": "red2"}))
            .await;
        response.assert_status(StatusCode::CREATED);

        let response = server.get("/user/2/favorites").await;
        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[test_log::test(tokio::test)]
    async fn test_default_user_password_is_hashed() {
        let pool = create_test_pool().await;
        let _server = create_test_app(pool.clone()).await;

        let hash: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE id = ?")
            .bind(DEFAULT_USER_ID)
            .fetch_one(&pool)
            .await
            .expect("default user row exists");

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_string("changeme", &hash).expect("hash parses"));
    }

    #[test_log::test(tokio::test)]
    async fn test_startup_is_idempotent() {
        let pool = create_test_pool().await;

        let first = create_test_app(pool.clone()).await;
        drop(first);
        let server = create_test_app(pool).await;

        let response = server.get("/people").await;
        let people: Value = response.json();
        assert_eq!(people.as_array().expect("people array").len(), 8);

        let response = server.get("/users").await;
        let users: Value = response.json();
        assert_eq!(users.as_array().expect("users array").len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_cors_allows_any_origin() {
        let pool = create_test_pool().await;
        let server = create_test_app(pool).await;

        let response = server
            .get("/people")
            .add_header(
                header::ORIGIN,
                HeaderValue::from_static("http://example.com"),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_database_file_created_on_first_boot() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("holocron.db");

        let mut config = create_test_config();
        config.database.url = format!("sqlite://{}", path.display());

        let app = Application::new(config).await.expect("application boots");
        assert!(path.exists());
        drop(app);
    }

    #[test_log::test(tokio::test)]
    async fn test_catalog_seeding_can_be_disabled() {
        let pool = create_test_pool().await;

        let mut config = create_test_config();
        config.seed_catalog = false;

        let app = Application::new_with_pool(config, Some(pool))
            .await
            .expect("application boots");
        let server = app.into_test_server();

        let response = server.get("/people").await;
        response.assert_status_ok();
        response.assert_json(&json!([]));

        // The default user is created regardless of catalog seeding.
        let response = server.get("/users").await;
        let users: Value = response.json();
        assert_eq!(users.as_array().expect("users array").len(), 1);
    }
}
