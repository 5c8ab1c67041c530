//! HTTP Server
//!
//! Wires the search handlers into an axum `Router` and runs it. The corpus is
//! loaded before the listener is bound, so no request can observe a half-loaded
//! store.

use crate::config::ServiceConfig;
use crate::search::handlers::{handle_search, handle_status};
use crate::storage::memory::DocumentStore;

use axum::{Extension, Router, routing::get};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub fn build_router(store: Arc<DocumentStore>) -> Router {
    Router::new()
        .route("/", get(handle_status))
        .route("/search", get(handle_search))
        .layer(Extension(store))
        .layer(TraceLayer::new_for_http())
}

/// Loads the corpus, binds the configured address and serves until Ctrl+C/SIGTERM.
pub async fn serve(config: ServiceConfig) -> anyhow::Result<()> {
    let store = Arc::new(DocumentStore::new());
    store.load(&config.data_path).await;

    let listener = TcpListener::bind(config.bind_addr).await?;

    run(listener, store, shutdown_signal()).await
}

/// Serves an already-loaded store on `listener` until `shutdown` resolves.
pub async fn run<F>(
    listener: TcpListener,
    store: Arc<DocumentStore>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(
        "HTTP server listening on {} ({} docs)",
        listener.local_addr()?,
        store.len().await
    );

    axum::serve(listener, build_router(store))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
