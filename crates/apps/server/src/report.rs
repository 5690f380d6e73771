use axum::http::StatusCode;
use tracing::{error, warn};

/// Sink for error diagnostics.
///
/// Receives one call per error response. Tests and quiet deployments use
/// [`SilentReporter`].
pub trait Reporter: Send + Sync {
    fn report(&self, status: StatusCode, message: &str);

    /// True when reports are dropped.
    fn is_silent(&self) -> bool {
        false
    }
}

/// Logs client errors at `warn` and server errors at `error`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, status: StatusCode, message: &str) {
        if status.is_server_error() {
            error!(status = status.as_u16(), "{message}");
        } else {
            warn!(status = status.as_u16(), "{message}");
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _status: StatusCode, _message: &str) {}

    fn is_silent(&self) -> bool {
        true
    }
}
