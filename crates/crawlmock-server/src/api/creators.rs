use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use crawlmock_core::validate_creator_result;
use serde_json::Value;

use crate::middleware::RequestId;

use super::{submit_batch, ApiError, AppState};

/// `POST /creators`: a batch of crawled creator results.
pub(super) async fn submit_creators(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    submit_batch(
        req_id.0,
        body,
        "creator",
        |raw| validate_creator_result(raw, state.options),
        |creator| state.sink.creator_received(creator),
    )
}
