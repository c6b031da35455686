use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use bp_calculator_domain::ReadingError;

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a validation error response
    pub fn validation_error(message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: message.to_string(),
            details,
        }
    }

    /// Create a not found error response
    pub fn not_found(resource: &str) -> Self {
        Self {
            error: "not_found".to_string(),
            message: format!("The requested {} could not be found", resource),
            details: None,
        }
    }

    fn status(&self) -> StatusCode {
        match self.error.as_str() {
            "validation_error" => StatusCode::BAD_REQUEST,
            "not_found" => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ReadingError> for ErrorResponse {
    fn from(err: ReadingError) -> Self {
        let details = match err {
            ReadingError::SystolicOutOfRange(systolic) => {
                serde_json::json!({ "field": "systolic", "value": systolic })
            }
            ReadingError::DiastolicOutOfRange(diastolic) => {
                serde_json::json!({ "field": "diastolic", "value": diastolic })
            }
            ReadingError::SystolicNotAboveDiastolic { systolic, diastolic } => {
                serde_json::json!({ "systolic": systolic, "diastolic": diastolic })
            }
        };
        Self::validation_error(&err.to_string(), Some(details))
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_error_maps_to_bad_request() {
        let response = ErrorResponse::from(ReadingError::DiastolicOutOfRange(120));

        assert_eq!(response.error, "validation_error");
        assert_eq!(response.message, "Diastolic must be between 40 and 100");
        assert_eq!(response.details.as_ref().unwrap()["field"], "diastolic");
        assert_eq!(response.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_by_error_code() {
        assert_eq!(ErrorResponse::not_found("page").status(), StatusCode::NOT_FOUND);
    }
}
