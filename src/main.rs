// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::choropleth_service::ChoroplethService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::memory_repository::InMemoryWeatherRepository;
use crate::infrastructure::svg_renderer::SvgOptions;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    choropleth, choropleth_svg, health_check, index, list_metrics, list_years,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = load_app_config()?;

    // Load data once; the service cannot start without it
    let repository = Arc::new(InMemoryWeatherRepository::load(&config.data)?);

    // Create services (application layer)
    let choropleth_service = ChoroplethService::new(repository);

    // Create application state
    let state = Arc::new(AppState {
        choropleth_service,
        svg_options: SvgOptions::default(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/metrics", get(list_metrics))
        .route("/api/years", get(list_years))
        .route("/api/choropleth", get(choropleth))
        .route("/api/choropleth.svg", get(choropleth_svg))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    tracing::info!("Starting Bangladesh weather map on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
