//! HTTP surface: three `GET` routes over a [`QueryService`].

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;

use crate::query::QueryService;

pub mod error;
pub mod handlers;

pub use error::{Error, RequestError};

/// Build the router. Each route is also reachable without its trailing slash.
pub fn build_router(service: QueryService) -> Router {
    Router::new()
        .route("/fetch-data/", get(handlers::fetch_data::handler))
        .route("/fetch-data", get(handlers::fetch_data::handler))
        .route("/fetch-all-data/", get(handlers::fetch_all_data::handler))
        .route("/fetch-all-data", get(handlers::fetch_all_data::handler))
        .route("/fetch-summary/", get(handlers::fetch_summary::handler))
        .route("/fetch-summary", get(handlers::fetch_summary::handler))
        .with_state(service)
}

/// Bind `at` and return the bound address plus the future that runs the server until a
/// shutdown signal arrives.
pub async fn serve(
    at: SocketAddr,
    service: QueryService,
) -> std::io::Result<(SocketAddr, impl Future<Output = std::io::Result<()>>)> {
    let listener = TcpListener::bind(at).await?;
    let bound_addr = listener.local_addr()?;
    let app = build_router(service);

    let fut = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .inspect_err(|err| tracing::error!(error = %err, "http server error"))
    };

    Ok((bound_addr, fut))
}

/// Resolves on SIGINT or SIGTERM (ctrl-c on non-unix targets).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let (mut sigint, mut sigterm) = match (
            signal(SignalKind::interrupt()),
            signal(SignalKind::terminate()),
        ) {
            (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!(error = %err, "failed to install signal handlers");
                return std::future::pending().await;
            }
        };
        tokio::select! {
            _ = sigint.recv() => tracing::info!(signal = "SIGINT", "shutdown signal"),
            _ = sigterm.recv() => tracing::info!(signal = "SIGTERM", "shutdown signal"),
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            return std::future::pending().await;
        }
        tracing::info!(signal = "ctrl-c", "shutdown signal");
    }
}
