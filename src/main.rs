use actix_web::{App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use welcome_api::config::ServerConfig;
use welcome_api::openapi::ApiDoc;

/// Welcome API Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Welcome page at the root path
/// - JSON health check endpoint
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Welcome page: `/`
/// - Health check: `/health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Bind address taken from `HOST` and `PORT` (defaults `127.0.0.1:8080`)
/// - Environment variables loaded from `.env` file (if present)
/// - Log filtering via `RUST_LOG` (defaults to `info`)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let address = format!("{}:{}", config.host, config.port);

    info!("starting welcome-api on {}", address);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .configure(welcome_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(address.as_str())?
    .run()
    .await
}
