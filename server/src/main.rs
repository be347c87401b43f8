//! swa-demo-server: prepares the store, then serves the user directory API.
//!
//! Run from repo root: `cargo run -p swa-demo-server`
//! Configure with `DATABASE_URL`, `HOST`, `PORT` (a `.env` file is read if present).

use swa_demo_api::{app_router, from_env, Lifecycle, LifecyclePhase, Store};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("swa_demo_api=info,tower_http=info")),
        )
        .init();

    let config = from_env()?;
    let store = Store::connect(&config.database_url, &config.store)?;
    let lifecycle = Lifecycle::new(store);

    if lifecycle.start().await == LifecyclePhase::InitFailed {
        tracing::warn!("serving in degraded mode; user routes will fail until the database is reachable");
    }

    let app = app_router(lifecycle.app_state());
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    lifecycle.shutdown().await;
    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::warn!("received SIGTERM, shutting down"),
    }
}
