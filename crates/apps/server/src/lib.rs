//! HTTP front end for the `stats` crate.
//!
//! Exposes `/mean`, `/median` and `/mode`, each taking a comma-separated
//! `nums` query parameter. Every failure is rendered as
//! `{"error": {"message": ..., "status": ...}}` with a matching status line.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod report;
pub mod routes;

pub use config::{ConfigError, RunMode, ServerConfig};
pub use error::ApiError;
pub use report::{Reporter, SilentReporter, TracingReporter};
pub use routes::build_router;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub reporter: Arc<dyn Reporter>,
}

impl AppState {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }
}
