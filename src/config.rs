//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable
//! overrides. The configuration file path defaults to `config.yaml` but can
//! be specified via `-f` flag or `HOLOCRON_CONFIG` environment variable.
//!
//! ## Loading Priority
//!
//! Configuration sources are merged in the following order (later sources
//! override earlier ones):
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`)
//! 2. **Environment variables** - Variables prefixed with `HOLOCRON_`
//! 3. **DATABASE_URL / PORT** - Bare variables honored for compatibility
//!    with existing deployments
//!
//! For nested config values, use double underscores in environment
//! variables. For example, `HOLOCRON_DATABASE__MAX_CONNECTIONS=2` sets the
//! `database.max_connections` field.
//!
//! ## Environment Variable Examples
//!
//! ```bash
//! # Override server port (either spelling works)
//! PORT=8080
//! HOLOCRON_PORT=8080
//!
//! # Set database connection
//! DATABASE_URL="sqlite://data/holocron.db"
//!
//! # Restrict CORS to one origin
//! HOLOCRON_CORS__ALLOWED_ORIGINS='["https://app.example.com"]'
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "HOLOCRON_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    /// Useful for CI/CD pipelines to catch config errors before deployment.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
///
/// This is the root configuration structure loaded from YAML and environment
/// variables. All fields have sensible defaults defined in the `Default`
/// implementation; the server starts with no config file at all.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// Legacy flat override for the database URL; `DATABASE_URL` lands here.
    /// Folded into `database.url` during load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Email address for the default user (created on first startup, owns
    /// all favorites until real authentication exists)
    pub default_user_email: String,
    /// Password for the default user. Override via
    /// `HOLOCRON_DEFAULT_USER_PASSWORD` in anything but a toy deployment.
    pub default_user_password: String,
    /// Load the bundled people/planets catalog into an empty database at
    /// startup
    pub seed_catalog: bool,
    /// CORS configuration for browser clients
    pub cors: CorsConfig,
}

/// Database connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite connection string (e.g., "sqlite://holocron.db");
    /// the file is created if it does not exist
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://holocron.db".to_string(),
            max_connections: 5,
        }
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins for CORS requests
    pub allowed_origins: Vec<CorsOrigin>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            // Every route is public and unauthenticated, so the permissive
            // default is the intended one
            allowed_origins: vec![CorsOrigin::Wildcard],
        }
    }
}

/// CORS origin specification.
///
/// Can be either a wildcard (`*`) to allow all origins, or a specific
/// origin string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CorsOrigin {
    /// Allow all origins (`*`)
    #[serde(deserialize_with = "parse_wildcard", serialize_with = "serialize_wildcard")]
    Wildcard,
    /// Specific origin (e.g., `https://app.example.com`)
    Origin(String),
}

fn parse_wildcard<'de, D>(deserializer: D) -> Result<(), D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    if s == "*" {
        Ok(())
    } else {
        Err(serde::de::Error::custom("Expected '*'"))
    }
}

fn serialize_wildcard<S>(serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str("*")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: None,
            database: DatabaseConfig::default(),
            default_user_email: "user1@holocron.local".to_string(),
            default_user_password: "changeme".to_string(),
            seed_catalog: true,
            cors: CorsConfig::default(),
        }
    }
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        let mut config: Self = Self::figment(args).extract()?;

        // A bare DATABASE_URL wins over the nested database.url
        if let Some(url) = config.database_url.take() {
            config.database.url = url;
        }

        config.validate().map_err(|e| figment::Error::from(e.to_string()))?;
        Ok(config)
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            // Load base config file
            .merge(Yaml::file(&args.config))
            // Environment variables can still override specific values
            .merge(Env::prefixed("HOLOCRON_").split("__"))
            // Common bare spellings used by existing deployments
            .merge(Env::raw().only(&["DATABASE_URL", "PORT"]))
    }

    /// Validate the configuration for consistency and required fields
    pub fn validate(&self) -> Result<(), Error> {
        if self.port == 0 {
            return Err(Error::Internal {
                operation: "Config validation: port cannot be 0".to_string(),
            });
        }

        if self.database.url.is_empty() {
            return Err(Error::Internal {
                operation: "Config validation: database.url cannot be empty. Set DATABASE_URL or database.url in the config file."
                    .to_string(),
            });
        }

        if self.database.max_connections == 0 {
            return Err(Error::Internal {
                operation: "Config validation: database.max_connections must be at least 1".to_string(),
            });
        }

        if self.default_user_email.is_empty() || self.default_user_password.is_empty() {
            return Err(Error::Internal {
                operation: "Config validation: default_user_email and default_user_password cannot be empty".to_string(),
            });
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(Error::Internal {
                operation: "Config validation: CORS allowed_origins cannot be empty. Add at least one allowed origin or '*'."
                    .to_string(),
            });
        }

        // Specific origins must be valid header values so the CORS layer
        // can be built without a runtime failure
        for origin in &self.cors.allowed_origins {
            if let CorsOrigin::Origin(value) = origin {
                if value.parse::<axum::http::HeaderValue>().is_err() {
                    return Err(Error::Internal {
                        operation: format!("Config validation: CORS origin {value:?} is not a valid header value"),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn args_for(path: &str) -> Args {
        Args {
            config: path.to_string(),
            validate: false,
        }
    }

    #[test]
    fn test_defaults_without_config_file() {
        Jail::expect_with(|_jail| {
            let config = Config::load(&args_for("missing.yaml"))?;

            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 3000);
            assert_eq!(config.database.url, "sqlite://holocron.db");
            assert!(config.seed_catalog);
            assert_eq!(config.cors.allowed_origins, vec![CorsOrigin::Wildcard]);

            Ok(())
        });
    }

    #[test]
    fn test_yaml_and_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
port: 4000
database:
  url: sqlite://from-yaml.db
"#,
            )?;

            jail.set_env("HOLOCRON_HOST", "127.0.0.1");
            jail.set_env("HOLOCRON_DATABASE__MAX_CONNECTIONS", "2");

            let config = Config::load(&args_for("test.yaml"))?;

            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 4000);
            assert_eq!(config.database.url, "sqlite://from-yaml.db");
            assert_eq!(config.database.max_connections, 2);

            Ok(())
        });
    }

    #[test]
    fn test_bare_database_url_and_port_win() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
port: 4000
database:
  url: sqlite://from-yaml.db
"#,
            )?;

            jail.set_env("DATABASE_URL", "sqlite://from-env.db");
            jail.set_env("PORT", "5000");

            let config = Config::load(&args_for("test.yaml"))?;

            assert_eq!(config.database.url, "sqlite://from-env.db");
            assert_eq!(config.port, 5000);

            Ok(())
        });
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("test.yaml", "cors:\n  allowed_origins: []\n")?;

            assert!(Config::load(&args_for("test.yaml")).is_err());

            Ok(())
        });
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("test.yaml", "prot: 4000\n")?;

            assert!(Config::load(&args_for("test.yaml")).is_err());

            Ok(())
        });
    }
}
