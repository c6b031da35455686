use std::sync::atomic::Ordering;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::api::AppState;

/// Middleware that logs every request with its outcome and duration, and
/// counts it for `/metrics`
pub async fn track_requests(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    state.requests_served.fetch_add(1, Ordering::Relaxed);
    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms,
        "API request completed"
    );

    response
}
