//! Health HTTP Routes
//!
//! Liveness check that also proves the store answers a query.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use super::errors::{ApiError, ApiResult};
use super::state::ApiState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Create health routes
pub fn health_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<(StatusCode, Json<HealthResponse>)> {
    state.store.ping().await.map_err(ApiError::Unavailable)?;

    Ok((
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
    ))
}
