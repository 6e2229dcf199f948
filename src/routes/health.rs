use crate::models::health::HealthStatus;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Provides a liveness probe for the service, indicating whether the API is
/// operational. This is a liveness stub: it never checks databases, disk
/// space, or dependent services, and it performs no logging or metric
/// emission. Request headers, query parameters, and bodies are ignored.
///
/// ## Response
///
/// - **200 OK**: Service is running
///   - Content-Type: `application/json`
///   - Body: [`HealthStatus`] containing:
///     - `status`: always the literal `"healthy"`
///     - `timestamp`: ISO 8601 timestamp sampled at request handling
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-06-01T12:00:00.000Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health Check",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus::healthy())
}
