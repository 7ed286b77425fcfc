use tokio::signal;
use tracing::info;

/// Completes when the process receives SIGINT (Ctrl+C) or SIGTERM.
///
/// Designed for `axum::serve(...).with_graceful_shutdown(shutdown_signal())`:
/// in-flight requests drain before the server task resolves, after
/// which the caller drops its resources (e.g. the MongoDB client).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}
