//! Party HTTP Routes
//!
//! Deleting a party detaches its candidates (their `party_id` becomes null)
//! in the same transaction.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::envelope::Envelope;
use super::errors::{ApiError, ApiResult};
use super::state::ApiState;
use crate::store::{Resource, Row};

/// Create party routes
pub fn party_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/parties", get(list_parties_handler))
        .route(
            "/party/:id",
            get(get_party_handler).delete(delete_party_handler),
        )
        .with_state(state)
}

async fn list_parties_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Envelope<Vec<Row>>>> {
    let rows = state
        .store
        .select_all(Resource::Parties)
        .await
        .map_err(ApiError::BulkRead)?;

    Ok(Json(Envelope::success(rows)))
}

async fn get_party_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<Row>>> {
    let row = state
        .store
        .select_by_id(Resource::Parties, id)
        .await
        .map_err(ApiError::Rejected)?;

    Ok(Json(Envelope::found(row)))
}

async fn delete_party_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope>> {
    let result = state
        .store
        .delete_by_id(Resource::Parties, id)
        .await
        .map_err(ApiError::Rejected)?;

    Ok(Json(Envelope::deleted(result.rows_affected)))
}
