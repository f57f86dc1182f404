//! TokenVault Server
//!
//! Local HTTP facade over the token store: `/ping`, `/store` and
//! `/fetch/:project`. Uses SQLite (embedded) for persistence.

pub mod error;
pub mod handlers;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use error::ApiError;
pub use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/ping", get(handlers::ping))
        .route("/store", post(handlers::tokens::store))
        .route("/fetch/:project", get(handlers::tokens::fetch))
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on `bind_address` until Ctrl-C.
pub async fn serve(state: AppState, bind_address: &str) -> Result<()> {
    let addr: SocketAddr = bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server listening on {}", addr);

    let db = state.db.clone();
    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down server...");
}
