use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current liveness status of the service along with a timestamp.
pub mod health;

/// # Welcome Page
///
/// Renders the HTML welcome page served at the root path.
pub mod home;

/// # Route Configuration
///
/// Registers all endpoints with the Actix-web service configuration.
///
/// ## Configured Routes
///
/// ```text
/// GET /        - Welcome page
/// GET /health  - Service health status
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home::index).service(health::health);
}
