//! Tracing subscriber setup for the binary.

use thiserror::Error;
use tracing_subscriber::{
    filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    EnvFilter,
};

use crate::config::ServerConfig;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter directive: {0}")]
    InvalidFilter(#[from] ParseError),

    #[error("Tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Builds the filter: `RUST_LOG` wins over the configured directive.
pub fn env_filter(server: &ServerConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&server.log_level)?),
    }
}

/// Installs the global subscriber, JSON formatted when `log_json` is set.
pub fn init_tracing(server: &ServerConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(server)?;
    let json = server.log_json;

    tracing_subscriber::registry()
        .with(filter)
        .with((!json).then(|| fmt::layer().with_target(true)))
        .with(json.then(|| fmt::layer().json().with_current_span(false)))
        .try_init()?;

    tracing::debug!(json, "Tracing initialized");
    Ok(())
}
