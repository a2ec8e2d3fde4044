use anyhow::Context;
use tracing_subscriber::EnvFilter;

use entry_api::{config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::config().clone();
    tracing::info!("Starting Entry API in {:?} mode", config.environment);

    let port = config.api.port;
    let state = AppState::from_config(config)
        .await
        .context("failed to initialize application state")?;

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Entry API listening on http://{}", bind_addr);

    axum::serve(listener, entry_api::app(state)).await.context("server")?;
    Ok(())
}
