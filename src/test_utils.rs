//! Shared helpers for tests.
//!
//! Everything here runs against an in-memory SQLite database so tests stay
//! independent of each other and leave nothing on disk.

use axum_test::TestServer;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::config::{Config, CorsConfig, CorsOrigin, DatabaseConfig};
use crate::migrator;

/// Open a fresh in-memory database and apply all migrations.
///
/// The pool is capped at a single connection: every new in-memory SQLite
/// connection gets its own empty database, so one long-lived connection is
/// what keeps the data alive for the duration of a test.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    migrator().run(&pool).await.expect("Failed to run migrations");

    pool
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        default_user_email: "user1@holocron.local".to_string(),
        default_user_password: "changeme".to_string(),
        seed_catalog: true,
        cors: CorsConfig {
            allowed_origins: vec![CorsOrigin::Wildcard],
        },
    }
}

/// Build a test server over the given pool.
///
/// Runs the full startup path, so the default user exists and the catalog is
/// seeded by the time the server answers its first request.
pub async fn create_test_app(pool: SqlitePool) -> TestServer {
    let config = create_test_config();

    let app = crate::Application::new_with_pool(config, Some(pool))
        .await
        .expect("Failed to create application");

    app.into_test_server()
}
