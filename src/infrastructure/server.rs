//! HTTP server lifecycle.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use super::config::AppConfig;

/// Binds the configured address and serves `router` until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or serving fails.
pub async fn run(config: &AppConfig, router: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.socket_addr()).await?;
    serve_until(listener, router, shutdown_signal()).await
}

/// Serves `router` on `listener` until `shutdown` resolves, then drains
/// in-flight requests.
///
/// # Errors
///
/// Returns an error if the listener fails while serving.
pub async fn serve_until<F>(listener: TcpListener, router: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(address = %listener.local_addr()?, "Function API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Function API stopped");
    Ok(())
}

// =============================================================================
// Shutdown Signal
// =============================================================================

async fn shutdown_signal() {
    let received = tokio::select! {
        () = interrupt() => "SIGINT",
        () = terminate() => "SIGTERM",
    };
    tracing::info!(signal = received, "Draining connections before shutdown");
}

async fn interrupt() {
    signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}

#[cfg(unix)]
async fn terminate() {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .expect("Failed to install SIGTERM handler")
        .recv()
        .await;
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
