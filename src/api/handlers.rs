//! Axum handlers for `/api/v1/*` routes.
//!
//! Only [`graph`] touches storage. Everything else is a constant or an echo.

use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, error, info};

use crate::models::{ConnectionStatus, GraphData, StatusBody, User};

use super::AppState;
use super::error::{ApiError, ApiJson, ApiPath};

const USERS_TABLE_ERROR: &str = "Error loading users table.";
const INVALID_STATUS: &str = "Invalid status";
const LOGIN_PLACEHOLDER: &str = "Login (to be implemented)";

#[derive(Debug, Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /api/v1/health: liveness only; does not open the database.
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/v1/graph
pub(super) async fn graph(State(state): State<AppState>) -> Result<Json<GraphData>, ApiError> {
    match state.store.count_users().await {
        Ok(users) => debug!(users, location = %state.store.location(), "users table probe ok"),
        Err(e) => {
            error!(location = %state.store.location(), "users table probe failed: {e}");
            return Err(ApiError::Internal(USERS_TABLE_ERROR.into()));
        }
    }
    Ok(Json(GraphData::for_mode(state.graph_mode)))
}

/// POST /api/v1/connection/status: validates and echoes; nothing is stored.
pub(super) async fn connection_status(
    ApiJson(body): ApiJson<StatusBody>,
) -> Result<Json<StatusBody>, ApiError> {
    let status: ConnectionStatus = body.status.parse().map_err(|e| {
        debug!("rejecting status change: {e}");
        ApiError::Validation(INVALID_STATUS.into())
    })?;
    debug!(%status, "connection status accepted");
    Ok(Json(StatusBody {
        status: status.as_str().to_string(),
    }))
}

/// POST /api/v1/users: returns the validated payload unchanged.
pub(super) async fn create_user(ApiJson(user): ApiJson<User>) -> Json<User> {
    info!(user_id = user.user_id, username = %user.username, "user registration (not persisted)");
    Json(user)
}

/// POST /api/v1/auth/login: placeholder; any body is ignored.
pub(super) async fn login() -> Json<Value> {
    Json(json!({ "message": LOGIN_PLACEHOLDER }))
}

/// GET /api/v1/users/{user_id}
pub(super) async fn get_user(ApiPath(user_id): ApiPath<i64>) -> Json<User> {
    Json(User::synthetic(user_id))
}
