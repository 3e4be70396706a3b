use anyhow::Context;
use clap::Parser;
use study_tracker::config::Config;
use study_tracker::http::{self, AppState};
use study_tracker::lifecycle::{setup_tracing, TrackerSystem};
use tokio::net::TcpListener;
use tracing::{info, warn};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let config = Config::parse();

    info!(?config, "Starting study tracker");

    let system = TrackerSystem::new(config.channel_capacity);
    let state = AppState::new(system.user_client.clone(), config.strict_deadlines);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    http::serve(listener, state, shutdown_signal())
        .await
        .context("HTTP server failed")?;

    system.shutdown().await.context("Store actor failed")?;
    Ok(())
}
