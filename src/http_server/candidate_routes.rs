//! Candidate HTTP Routes
//!
//! Reads join each candidate with its party's name as `party_name`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use super::envelope::Envelope;
use super::errors::{ApiError, ApiResult};
use super::state::ApiState;
use crate::store::{Resource, Row};
use crate::validation::{input_check, take_fields, Record};

/// Fields a new candidate must carry
pub const CREATE_FIELDS: &[&str] = &["first_name", "last_name", "industry_connected"];

/// Fields a candidate update must carry
pub const UPDATE_FIELDS: &[&str] = &["party_id"];

/// Create candidate routes
pub fn candidate_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/candidates", get(list_candidates_handler))
        .route("/candidate", post(create_candidate_handler))
        .route(
            "/candidate/:id",
            get(get_candidate_handler)
                .put(update_candidate_handler)
                .delete(delete_candidate_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_candidates_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Envelope<Vec<Row>>>> {
    let rows = state
        .store
        .select_all(Resource::Candidates)
        .await
        .map_err(ApiError::BulkRead)?;

    Ok(Json(Envelope::success(rows)))
}

async fn get_candidate_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<Row>>> {
    let row = state
        .store
        .select_by_id(Resource::Candidates, id)
        .await
        .map_err(ApiError::Rejected)?;

    Ok(Json(Envelope::found(row)))
}

/// A missing or malformed JSON body is checked as an empty record.
async fn create_candidate_handler(
    State(state): State<Arc<ApiState>>,
    body: Option<Json<Record>>,
) -> ApiResult<Json<Envelope>> {
    let body = body.map(|Json(record)| record).unwrap_or_default();
    if let Some(errors) = input_check(&body, CREATE_FIELDS) {
        return Err(ApiError::Validation(errors));
    }

    let result = state
        .store
        .insert(Resource::Candidates, take_fields(&body, CREATE_FIELDS))
        .await
        .map_err(ApiError::Rejected)?;
    tracing::info!(id = ?result.last_insert_id, "candidate created");

    Ok(Json(Envelope::inserted(Value::Object(body), result.last_insert_id)))
}

async fn update_candidate_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    body: Option<Json<Record>>,
) -> ApiResult<Json<Envelope>> {
    let body = body.map(|Json(record)| record).unwrap_or_default();
    if let Some(errors) = input_check(&body, UPDATE_FIELDS) {
        return Err(ApiError::Validation(errors));
    }

    let result = state
        .store
        .update_by_id(Resource::Candidates, id, take_fields(&body, UPDATE_FIELDS))
        .await
        .map_err(ApiError::Rejected)?;

    Ok(Json(Envelope::updated(Value::Object(body), result.rows_affected)))
}

async fn delete_candidate_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope>> {
    let result = state
        .store
        .delete_by_id(Resource::Candidates, id)
        .await
        .map_err(ApiError::Rejected)?;

    Ok(Json(Envelope::deleted(result.rows_affected)))
}
