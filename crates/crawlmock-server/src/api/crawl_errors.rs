use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use crawlmock_core::validate_crawl_error;
use serde_json::Value;

use crate::middleware::RequestId;

use super::{submit_batch, ApiError, AppState};

/// `POST /creators/errors`: failures the crawler hit while collecting creators.
pub(super) async fn submit_crawl_errors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    submit_batch(
        req_id.0,
        body,
        "crawl error",
        |raw| validate_crawl_error(raw, state.options),
        |error| state.sink.crawl_error_received(error),
    )
}
