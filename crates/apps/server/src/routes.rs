use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::{Method, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use stats::{parse_nums, AppError, Operation, StatResult, Statistics};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::{handle_panic, not_found, report_errors, ApiError};
use crate::AppState;

/// Query string accepted by every statistic route. A missing `nums` is empty.
#[derive(Debug, Deserialize)]
struct NumsQuery {
    #[serde(default)]
    nums: String,
}

#[derive(Debug, Serialize)]
struct StatResponse {
    response: StatResult,
}

type NumsParam = Result<Query<NumsQuery>, QueryRejection>;

/// Builds the full application: statistic routes, 404 fallback and the
/// error, trace and CORS layers.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/healthz", get(healthz).fallback(not_found))
        .route("/mean", get(mean).fallback(not_found))
        .route("/median", get(median).fallback(not_found))
        .route("/mode", get(mode).fallback(not_found));
    with_error_handling(routes, state)
}

fn with_error_handling(routes: Router<AppState>, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    routes
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(state.clone(), report_errors))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

async fn mean(query: NumsParam) -> Result<Json<StatResponse>, ApiError> {
    run(Operation::Mean, query)
}

async fn median(query: NumsParam) -> Result<Json<StatResponse>, ApiError> {
    run(Operation::Median, query)
}

async fn mode(query: NumsParam) -> Result<Json<StatResponse>, ApiError> {
    run(Operation::Mode, query)
}

fn run(operation: Operation, query: NumsParam) -> Result<Json<StatResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let nums = parse_nums(&query.nums)?;
    debug!(operation = operation.name(), count = nums.len(), "computing statistic");

    let result = Statistics::compute(operation, &nums);
    if !result.value.is_finite() {
        return Err(AppError::internal(format!("{} is out of range", operation.name())).into());
    }
    Ok(Json(StatResponse { response: result }))
}
