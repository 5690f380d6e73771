use std::any::Any;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use stats::AppError;

use crate::AppState;

/// HTTP wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        error_response(status, self.0.message())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    message: &'a str,
    status: u16,
}

/// Marker left on error responses so [`report_errors`] can pick them up.
#[derive(Debug, Clone)]
struct ErrorReport {
    message: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = ErrorBody {
        error: ErrorDetail {
            message,
            status: status.as_u16(),
        },
    };
    let mut response = (status, Json(body)).into_response();
    response.extensions_mut().insert(ErrorReport {
        message: message.to_string(),
    });
    response
}

/// Forwards each error response to the configured reporter.
pub async fn report_errors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if let Some(report) = response.extensions().get::<ErrorReport>() {
        state.reporter.report(response.status(), &report.message);
    }
    response
}

/// Renders a caught panic as a 500 body. Only the panic message is exposed.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "Internal Server Error"
    };
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Fallback for unmatched routes and methods.
pub async fn not_found() -> ApiError {
    ApiError(AppError::not_found())
}
