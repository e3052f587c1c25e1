//! Axum HTTP surface.
//!
//! ## URL layout
//!
//! ```text
//! GET  /api/v1/health
//! GET  /api/v1/graph
//! POST /api/v1/connection/status
//! POST /api/v1/users
//! GET  /api/v1/users/{user_id}
//! POST /api/v1/auth/login
//! ```
//!
//! CORS is fully open (any origin, method, header). Every request gets a
//! `tower_http` trace span.

pub mod error;
mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{Config, GraphMode};
use crate::error::AppError;
use crate::store::Store;

pub use error::ApiError;

// ── Shared request state ──────────────────────────────────────────────────────

/// Router state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone; no connection is held.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub graph_mode: GraphMode,
}

impl AppState {
    pub fn new(store: Store, graph_mode: GraphMode) -> Self {
        Self { store, graph_mode }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(Store::from_config(&config.database)?, config.api.graph_mode))
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let v1 = Router::new()
        .route("/health",            get(handlers::health))
        .route("/graph",             get(handlers::graph))
        .route("/connection/status", post(handlers::connection_status))
        .route("/users",             post(handlers::create_user))
        .route("/users/{user_id}",   get(handlers::get_user))
        .route("/auth/login",        post(handlers::login));

    Router::new()
        .nest("/api/v1", v1)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ── Server loop ───────────────────────────────────────────────────────────────

/// Bind `bind_addr` and serve until `shutdown` is cancelled.
pub async fn serve(
    bind_addr: &str,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    let router = build_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

    info!(%bind_addr, "ThinkAlike API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Server(format!("axum server error: {e}")))?;

    info!("ThinkAlike API shut down");
    Ok(())
}
