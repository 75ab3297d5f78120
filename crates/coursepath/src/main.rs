use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use coursepath::catalog::Catalogs;
use coursepath::config::AppConfig;
use coursepath::server;
use coursepath::types::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Optional config file path as the first argument.
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path))
            .map_err(|e| anyhow::anyhow!("Failed to load config from {path}: {e}"))?,
        None => AppConfig::default(),
    };

    let catalogs = Catalogs::load_from_directory(&config.data_dir)
        .context("Failed to load catalog data")?;

    let state = Arc::new(AppState::new(catalogs));
    let router = server::create_router(state);

    let bind_addr = format!("{}:{}", config.address, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    info!("Listening on {bind_addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
