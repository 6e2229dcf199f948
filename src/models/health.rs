use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Payload
///
/// Represents the liveness status of the service with a timestamp.
/// Constructed fresh on every health check invocation and discarded after
/// the response is sent; never persisted or mutated.
///
/// ## Fields
/// - `status`: String indicating service availability; always the literal
///   `"healthy"` — this is a liveness stub, no dependency checks are run
/// - `timestamp`: Wall-clock time at construction, ISO 8601 with millisecond
///   precision and UTC designator
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-06-01T12:00:00.000Z"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
