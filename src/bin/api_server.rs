// API Server Binary Entry Point
//
// Purpose: Start the Axum receipt processing server
// Usage: cargo run --bin api_server

use receipt_processor::{create_router, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "receipt_processor=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let config = Config::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  BIND_ADDR: {}", config.bind_addr);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  SCORING_POLICY: {}", config.scoring_policy);

    // One scorer and one store for the lifetime of the process
    let state = AppState::new(&config);

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
