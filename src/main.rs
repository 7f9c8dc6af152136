mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod pantry;
mod routes;
mod state;

use anyhow::Context;
use config::Config;
use pantry::PantryClient;
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    tracing::info!("pantry-basket-proxy starting");

    let config = Config::from_env()?;
    config.log_startup();

    let pantry_client = PantryClient::from_config(&config)?;
    let addr = format!("{}:{}", config.service_host, config.service_port);

    let state = AppState {
        pantry_client,
        config: Arc::new(config),
    };
    let port = state.config.service_port;
    let app = app::router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server running on http://localhost:{}", port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
