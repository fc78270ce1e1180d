mod api_doc;
mod auth;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

use anyhow::Context;
use config::Config;
use state::AppState;
use upstream::UpstreamClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("vaultn-proxy starting");

    let config = Arc::new(Config::from_env()?);
    config.log_startup();
    tracing::info!("Target: {}", upstream::VAULTN_API_BASE);

    let upstream = UpstreamClient::from_config(&config)?;

    let state = AppState {
        upstream,
        config: config.clone(),
    };

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("VaultN proxy listening on {}", addr);

    axum::serve(listener, routes::app(state))
        .await
        .context("Server error")?;

    Ok(())
}
