use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use crawlmock_core::{CreatorId, DEFAULT_SAMPLE_SIZE};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[allow(clippy::cast_possible_wrap)]
const DEFAULT_NUM: i64 = DEFAULT_SAMPLE_SIZE as i64;

#[derive(Debug, Deserialize)]
pub(super) struct CreatorIdsQuery {
    pub num: Option<i64>,
}

/// `GET /creator-ids?num=n`: `n` distinct ids drawn from the pool.
pub(super) async fn sample_creator_ids(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<CreatorIdsQuery>, QueryRejection>,
) -> Result<Json<Vec<CreatorId>>, ApiError> {
    let Query(query) = query.map_err(|e| {
        ApiError::new(
            req_id.0.clone(),
            "validation_error",
            format!("num must be an integer: {}", e.body_text()),
        )
    })?;
    let requested = query.num.unwrap_or(DEFAULT_NUM);

    let ids = state
        .pool
        .sample(requested, &mut rand::rng())
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    tracing::debug!(requested, pool_size = state.pool.len(), "sampled creator ids");
    Ok(Json(ids))
}
