//! Wayfinder server binary.
//!
//! Loads configuration, wires the in-memory trip repository and the HTTP
//! scoring gateway behind the client wrapper, and serves the API.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use wayfinder::adapters::backend::HttpRecommendationBackend;
use wayfinder::adapters::http::{api_router, AppState, DebugInfo};
use wayfinder::adapters::trips::InMemoryTripRepository;
use wayfinder::application::TravelClient;
use wayfinder::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("failed to load configuration: {error}");
            std::process::exit(1);
        }
    };
    if let Err(error) = config.validate() {
        eprintln!("invalid configuration: {error}");
        std::process::exit(1);
    }

    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !config.backend.is_configured() {
        tracing::warn!(
            "scoring backend base URL is not set; /recommend will fail until it is configured"
        );
    }

    let trips = Arc::new(InMemoryTripRepository::with_sample_trips().await);
    let backend = Arc::new(HttpRecommendationBackend::from_config(&config.backend));
    let client = TravelClient::new(backend, trips);
    let state = AppState::new(client, DebugInfo::from_config(&config));

    let app = api_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%addr, %error, "failed to bind server address");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, environment = config.server.environment.as_str(), "wayfinder listening");
    if let Err(error) = axum::serve(listener, app).await {
        tracing::error!(%error, "server exited with error");
        std::process::exit(1);
    }
}
