mod crawl_errors;
mod creator_ids;
mod creators;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use crawlmock_core::{
    validate_batch, CreatorPool, ObservationSink, ValidateOptions, ValidationFailure,
};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<CreatorPool>,
    pub sink: Arc<dyn ObservationSink>,
    pub options: ValidateOptions,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ElementFailure>>,
}

/// One rejected element of a submitted batch.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ElementFailure {
    pub index: usize,
    pub path: String,
    pub expected: &'static str,
    pub actual: String,
}

impl ElementFailure {
    fn new(index: usize, failure: &ValidationFailure) -> Self {
        Self {
            index,
            path: failure.path().to_string(),
            expected: failure.expected(),
            actual: failure.actual(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    pool_size: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
                details: None,
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: Vec<ElementFailure>) -> Self {
        self.error.details = Some(details);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            "validation_error" => StatusCode::UNPROCESSABLE_ENTITY,
            "payload_too_large" => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Map a failed JSON body extraction to an [`ApiError`].
fn map_json_rejection(request_id: String, rejection: &JsonRejection) -> ApiError {
    let code = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        "payload_too_large"
    } else {
        "bad_request"
    };
    ApiError::new(request_id, code, rejection.body_text())
}

/// Validate every element of a submitted batch and forward the valid ones.
///
/// Valid elements reach `accept` in submission order even when siblings
/// fail. Any failure turns the whole response into a `validation_error`
/// listing each rejected index.
pub(super) fn submit_batch<T, V, A>(
    request_id: String,
    body: Result<Json<Value>, JsonRejection>,
    kind: &'static str,
    validator: V,
    accept: A,
) -> Result<StatusCode, ApiError>
where
    V: Fn(&Value) -> Result<T, ValidationFailure>,
    A: Fn(&T),
{
    let Json(payload) = body.map_err(|e| map_json_rejection(request_id.clone(), &e))?;
    let Value::Array(raws) = payload else {
        return Err(ApiError::new(
            request_id,
            "bad_request",
            format!("request body must be a JSON array of {kind} records"),
        ));
    };

    let mut failures = Vec::new();
    for outcome in validate_batch(&raws, validator) {
        match outcome.result {
            Ok(record) => accept(&record),
            Err(failure) => {
                tracing::warn!(
                    kind,
                    index = outcome.index,
                    path = %failure.path(),
                    expected = failure.expected(),
                    actual = %failure.actual(),
                    "rejected invalid element"
                );
                failures.push(ElementFailure::new(outcome.index, &failure));
            }
        }
    }

    if failures.is_empty() {
        return Ok(StatusCode::OK);
    }

    let message = format!(
        "{} of {} {kind} records failed validation",
        failures.len(),
        raws.len()
    );
    Err(ApiError::new(request_id, "validation_error", message).with_details(failures))
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

pub fn build_app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/creator-ids", get(creator_ids::sample_creator_ids))
        .route("/creators", post(creators::submit_creators))
        .route("/creators/errors", post(crawl_errors::submit_crawl_errors))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id))
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            pool_size: state.pool.len(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use crawlmock_core::{CreatorPool, RecordingSink, ValidateOptions};
    use tower::ServiceExt;

    use super::{build_app, AppState};

    pub(crate) const TEST_BODY_LIMIT: usize = 64 * 1024;

    pub(crate) fn pool_of(n: usize) -> CreatorPool {
        CreatorPool::new((0..n).map(|i| format!("74930000000000{i:05}")).collect())
            .expect("valid pool")
    }

    pub(crate) fn app_with(
        pool_size: usize,
        options: ValidateOptions,
    ) -> (Router, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let state = AppState {
            pool: Arc::new(pool_of(pool_size)),
            sink: sink.clone(),
            options,
        };
        (build_app(state, TEST_BODY_LIMIT), sink)
    }

    pub(crate) fn test_app() -> (Router, Arc<RecordingSink>) {
        app_with(150, ValidateOptions::default())
    }

    pub(crate) async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        send(
            app,
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
    }

    pub(crate) async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        send(
            app,
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
    }

    pub(crate) async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, body.to_vec())
    }

    pub(crate) fn json(body: &[u8]) -> serde_json::Value {
        serde_json::from_slice(body).expect("json parse")
    }
}
