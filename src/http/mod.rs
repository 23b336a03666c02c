//! HTTP surface of the product registry.
//!
//! This module provides the axum application:
//! - Product routes at `/products` (see [`routes`])
//! - JSON error payloads (see [`error`])
//! - Permissive CORS and request tracing layers

use crate::clients::ProductClient;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod middleware;
pub mod routes;

pub use error::{ApiError, ErrorResponse};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Client for the product actor
    pub products: ProductClient,
}

impl AppState {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }
}

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_router())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .with_state(state)
}

/// Serve the application on an already bound listener until `shutdown` resolves.
///
/// The router (and the clients it holds) is dropped before this returns.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Product registry listening on http://{}", addr);
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
