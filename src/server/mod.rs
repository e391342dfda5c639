//! HTTP server for the catalog API.
//!
//! [`build_router`] assembles the product routes, health checks, request
//! tracing, and a permissive CORS layer (the dashboard is served from a
//! different origin in development). [`serve`] binds and runs the router
//! with graceful shutdown on SIGTERM / Ctrl+C.

pub mod handlers;

use anyhow::Result;
use axum::Router;
use axum::routing::{get, put};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::service::CatalogService;
pub use handlers::AppState;

/// Build the catalog router over the given service.
///
/// Routes:
/// - `GET  /products` / `POST /products`
/// - `PUT  /products/{id}` / `DELETE /products/{id}`
/// - `GET  /health` and `/healthz`
pub fn build_router(catalog: CatalogService) -> Router {
    let state = AppState { catalog };

    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/{id}",
            put(handlers::update_product).delete(handlers::delete_product),
        )
        .route("/health", get(handlers::health_check))
        .route("/healthz", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Serve the catalog API with graceful shutdown.
///
/// This will:
/// - Bind to the provided address
/// - Start serving requests
/// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
///
/// # Example
///
/// ```rust,ignore
/// let service = CatalogService::new(Arc::new(InMemoryProductStore::new()));
/// catalog::server::serve("127.0.0.1:5001", service).await?;
/// ```
pub async fn serve(addr: &str, catalog: CatalogService) -> Result<()> {
    let app = build_router(catalog);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

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
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
