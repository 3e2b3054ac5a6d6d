//! Voter HTTP Routes

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::envelope::Envelope;
use super::errors::{ApiError, ApiResult};
use super::state::ApiState;
use crate::store::{Resource, Row};

/// Create voter routes
pub fn voter_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/voters", get(list_voters_handler))
        .with_state(state)
}

async fn list_voters_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Envelope<Vec<Row>>>> {
    let rows = state
        .store
        .select_all(Resource::Voters)
        .await
        .map_err(ApiError::BulkRead)?;

    Ok(Json(Envelope::success(rows)))
}
