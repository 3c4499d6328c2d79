//! Agri Credit server binary.
//!
//! Loads configuration, installs tracing, wires the in-process adapters and
//! serves the realtime push endpoint.

use agri_credit::app::{AppError, Application};
use agri_credit::config::AppConfig;
use agri_credit::telemetry;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.server)?;

    let app = Application::build(&config)?;
    let addr = config.server.socket_addr();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        push = config.push.enabled,
        "Agri Credit listening"
    );

    axum::serve(listener, app.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Agri Credit stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
