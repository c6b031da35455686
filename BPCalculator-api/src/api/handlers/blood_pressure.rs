use axum::{
    extract::{Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, instrument, warn};

use bp_calculator_domain::{explain_with_guidance, Reading};

use crate::entities::blood_pressure::{CalculateRequest, CalculateResponse, ExplainResponse};
use crate::entities::common::ErrorResponse;

/// Classify a blood pressure reading
#[utoipa::path(
    post,
    path = "/api/bp/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Reading classified", body = CalculateResponse),
        (status = 400, description = "Reading out of range or systolic not above diastolic", body = ErrorResponse),
    ),
    tag = "blood_pressure"
)]
#[instrument(skip(request))]
pub async fn calculate_blood_pressure(
    Json(request): Json<CalculateRequest>,
) -> Result<impl IntoResponse, Response> {
    info!(
        systolic = request.systolic,
        diastolic = request.diastolic,
        "BP calculation requested"
    );

    let reading = Reading::new(request.systolic, request.diastolic).map_err(|err| {
        warn!(
            systolic = request.systolic,
            diastolic = request.diastolic,
            "BP validation failed: {}",
            err
        );
        ErrorResponse::from(err).into_response()
    })?;

    let response = CalculateResponse::from(reading);
    info!(category = %response.category, "BP result");

    Ok((StatusCode::OK, Json(response)))
}

/// Explain a category by name. Unknown names are answered with fallback text
/// and `isValid: false`.
#[utoipa::path(
    get,
    path = "/api/bp/explain/{category}",
    params(
        ("category" = String, Path, description = "Category name (Low, Ideal, PreHigh, High), case-insensitive")
    ),
    responses(
        (status = 200, description = "Category explanation", body = ExplainResponse),
    ),
    tag = "blood_pressure"
)]
#[instrument]
pub async fn explain_category(Path(category): Path<String>) -> impl IntoResponse {
    info!("BP explanation requested for category: {}", category);

    let guided = explain_with_guidance(Some(&category));
    if !guided.explanation.is_valid {
        info!("Unknown category requested: {}", category);
    }

    Json(ExplainResponse::new(category, guided))
}
