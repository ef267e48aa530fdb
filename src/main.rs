// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::memory_session_repository::InMemorySessionRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_app_config()?;

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create repository (infrastructure layer)
    let repository = Arc::new(InMemorySessionRepository::new());

    // Create services (application layer)
    let dashboard_service = DashboardService::new(
        repository,
        Arc::new(SystemClock),
        config.simulation.rng(),
        config.session.idle_timeout(),
    );

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        cookie_name: config.session.cookie_name.clone(),
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server.bind_addr))?;
    tracing::info!("Starting home-monitor on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
