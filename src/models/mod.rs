/// # Health Status Payload
///
/// Represents the liveness status of the service with a timestamp.
/// Used as the response format for the health check endpoint.
///
/// ## Fields
/// - `status`: String indicating service availability (always "healthy")
/// - `timestamp`: ISO 8601 formatted timestamp of the status check
pub mod health;
