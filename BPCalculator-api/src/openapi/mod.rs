use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::metrics,

        // Blood pressure endpoints
        crate::api::handlers::blood_pressure::calculate_blood_pressure,
        crate::api::handlers::blood_pressure::explain_category,
    ),
    components(
        schemas(
            // Entities
            crate::entities::blood_pressure::CalculateRequest,
            crate::entities::blood_pressure::CalculateResponse,
            crate::entities::blood_pressure::ExplainResponse,
            crate::entities::common::ErrorResponse,
            bp_calculator_domain::Category,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::MetricsResponse,
        )
    ),
    tags(
        (name = "health", description = "Health and metrics endpoints"),
        (name = "blood_pressure", description = "Blood pressure classification and category explanations")
    ),
    info(
        title = "BP Calculator API",
        version = "0.1.0",
        description = "Classifies blood pressure readings and explains each category",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
