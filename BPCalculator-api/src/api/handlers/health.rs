use std::sync::atomic::Ordering;

use axum::{extract::State, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::api::AppState;

pub const SERVICE_NAME: &str = "BP Calculator + Category Explainer";

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "Healthy" while the process is serving requests
    pub status: String,
    /// RFC 3339 timestamp with milliseconds
    pub timestamp: String,
    pub service: String,
    /// Application version from the Cargo manifest
    pub version: String,
    /// Environment name from `APP_ENV`
    pub environment: String,
}

/// Runtime metrics
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server started
    pub uptime_seconds: i64,
    /// Requests completed since startup
    pub requests_served: u64,
}

// Track the time when the server started
static SERVER_START_TIME: OnceCell<DateTime<Utc>> = OnceCell::new();

/// Record the server start time. Later calls keep the first value.
pub fn initialize_server_start_time() {
    SERVER_START_TIME.get_or_init(Utc::now);
}

fn uptime_seconds(now: DateTime<Utc>) -> i64 {
    SERVER_START_TIME
        .get()
        .map(|started| (now - *started).num_seconds().max(0))
        .unwrap_or(0)
}

/// Health check endpoint to verify the API is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    info!("Health check called - Status: Healthy");

    Json(HealthResponse {
        status: "Healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
    })
}

/// Uptime and request counters
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Current metrics", body = MetricsResponse)
    ),
    tag = "health"
)]
#[instrument(skip(state))]
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let now = Utc::now();
    let response = MetricsResponse {
        timestamp: now,
        uptime_seconds: uptime_seconds(now),
        requests_served: state.requests_served.load(Ordering::Relaxed),
    };

    info!(
        uptime_seconds = response.uptime_seconds,
        requests_served = response.requests_served,
        "Metrics checked"
    );

    Json(response)
}
