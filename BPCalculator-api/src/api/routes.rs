use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{blood_pressure, health, page};
use crate::api::telemetry::track_requests;
use crate::api::AppState;
use crate::entities::common::ErrorResponse;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(state: AppState) -> Router {
    debug!("Creating application router");

    let api_routes = Router::new()
        .route("/bp/calculate", post(blood_pressure::calculate_blood_pressure))
        .route("/bp/explain/:category", get(blood_pressure::explain_category));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/", get(page::calculator_page).post(page::submit_calculator))
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::metrics));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .fallback(not_found)
        .with_state(state.clone());

    // Configure the Swagger UI
    let app = app.merge(configure_swagger_routes());

    debug!("Swagger UI merged");

    health::initialize_server_start_time();

    app.layer(middleware::from_fn_with_state(state, track_requests))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> impl IntoResponse {
    ErrorResponse::not_found("resource")
}
