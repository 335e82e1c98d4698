//! Web3Signer proxy binary.

use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use web3signer_proxy::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting web3signer proxy");

    let config: Config = config::Config::builder()
        .add_source(config::File::with_name("proxy").required(false))
        .add_source(config::Environment::with_prefix("PROXY"))
        .build()
        .and_then(|c| c.try_deserialize())
        .unwrap_or_else(|e| {
            error!(error = %e, "FATAL: Config error — fix env vars or proxy.toml");
            std::process::exit(1);
        });

    let bind_address = config.bind_address.clone();

    // Refuses to start without an upstream URL.
    let state = match AppState::new(config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!(error = %e, "FATAL: refusing to start");
            std::process::exit(1);
        }
    };

    info!(upstream = %state.config.upstream_base(), "Configuration loaded");

    let app = create_router(state);

    info!(address = %bind_address, "Listening");

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Proxy shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
