use std::{net::SocketAddr, sync::Arc};
use thread_summarizer::{router, AppState, Config, Controller, FileStore, RateLimiter, SummarizerClient};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let store = FileStore::open(&config.data_path).await;
    info!("quota store at {}", store.path().display());
    let limiter = RateLimiter::new(Arc::new(store));

    let client = SummarizerClient::new(&config.api_url, config.request_timeout);
    info!("summarizer endpoint {}", client.endpoint());

    let state = AppState::new(Controller::new(client, limiter));
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
    }
    info!("shutting down");
}
