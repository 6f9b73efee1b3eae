//! Pulse Guide service entry point.
//!
//! Loads configuration, loads and validates the guide once, then serves the
//! guide API until the process is stopped.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::prelude::*;

use pulse_guide::adapters::http::{build_router, GuideAppState};
use pulse_guide::adapters::storage::InMemoryGuideSessionStore;
use pulse_guide::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    setup_logging(&config.server);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Service stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source = config.guide.guide_source();
    info!(source = %source.describe(), "Loading guide");

    // A guide that fails validation never serves a session.
    let graph = Arc::new(source.load().await?);
    info!(
        entry = %graph.entry_key(),
        steps = graph.len(),
        "Guide loaded"
    );

    let state = GuideAppState::new(
        graph,
        Arc::new(InMemoryGuideSessionStore::new()),
        config.guide.session_limits(),
    );
    let app = build_router(state, &config.server);

    let addr = config.server.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

fn setup_logging(server: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| server.log_level.as_str().into());

    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
