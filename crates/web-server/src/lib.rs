use axum::{Router, routing::get};
use dataset::Dataset;
use query_engine::QueryEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod views;

/// The shared application state that all handlers can access.
///
/// Built once before the listener binds and never mutated afterwards, so
/// handlers read it without locking.
pub struct AppState {
    pub dataset: Dataset,
    pub engine: QueryEngine,
}

impl AppState {
    pub fn new(dataset: Dataset, engine: QueryEngine) -> Self {
        Self { dataset, engine }
    }
}

/// Builds the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_schools))
        .route("/details/:code", get(handlers::school_details))
        .route("/health", get(|| async { "OK" }))
        .with_state(Arc::new(state))
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves until Ctrl-C.
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
}
