// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::activity_service::ActivityService;
use crate::application::dashboard_service::DashboardService;
use crate::application::stats_service::StatsService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_api::HttpDashboardApi;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create API client (infrastructure layer)
    let api = Arc::new(HttpDashboardApi::new(&config.api)?);

    // Create services (application layer)
    let stats_service = StatsService::new(api.clone(), config.failures.analytics);
    let activity_service = ActivityService::new(api, config.activity.clone());
    let dashboard_service = DashboardService::new(stats_service, activity_service);

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!(
        "Starting ticket-dashboard on {} (upstream {})",
        addr,
        config.api.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
