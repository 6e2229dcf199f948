use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. The welcome page is an HTML surface and is intentionally left out
/// of the document; only the JSON health contract is described.
///
/// # Endpoints
/// - Health Check: `GET /health`
///
/// # Schemas
/// - `HealthStatus`: Service liveness payload
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health::health),
    components(schemas(crate::models::health::HealthStatus)),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Minimal web service serving a welcome page and a JSON liveness probe",
        title = "Welcome API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
