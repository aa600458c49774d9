//! Telemetry initialization: structured tracing with console output.
//!
//! Verbosity follows `RUST_LOG` (standard tracing-subscriber `EnvFilter`
//! syntax), defaulting to `info` when unset:
//!
//! ```bash
//! RUST_LOG=holocron=debug,tower_http=debug holocron
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the tracing subscriber.
///
/// Call once per process before the server starts; fails if a global
/// subscriber is already installed.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");
    Ok(())
}
