use anyhow::{Context, Result};
use showcase_api::{app, config::Config, middleware};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics().context("Failed to install metrics recorder")?;

    info!("Starting showcase site v{}", env!("CARGO_PKG_VERSION"));

    let store = app::connect_store(&config).await?;
    info!(backend = store.backend().as_str(), "Content store ready");

    let addr = config.socket_addr().context("Invalid listen address")?;
    let app = app::create_app(config.clone(), store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
