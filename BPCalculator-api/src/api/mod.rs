pub mod handlers;
pub mod routes;
pub mod telemetry;

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use axum::Router;

use crate::config::AppConfig;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,

    /// Number of requests completed since startup
    pub requests_served: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            requests_served: Arc::new(AtomicU64::new(0)),
        }
    }
}

/// Create the application router
pub fn create_application(config: AppConfig) -> Router {
    routes::create_app(AppState::new(config))
}
