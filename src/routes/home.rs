use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};
use askama::Template;

#[derive(Template)]
#[template(path = "welcome.html")]
struct WelcomeTemplate<'a> {
    app_name: &'a str,
    version: &'a str,
}

/// # Welcome Page
///
/// Serves the rendered welcome page at the root path. No request inputs are
/// read and no state is touched; a template rendering failure surfaces as an
/// internal server error through the framework's default error path.
///
/// ## Response
///
/// - **200 OK**: Rendered welcome page
///   - Content-Type: `text/html`
#[get("/")]
pub async fn index() -> actix_web::Result<HttpResponse> {
    let page = WelcomeTemplate {
        app_name: "Welcome API",
        version: env!("CARGO_PKG_VERSION"),
    }
    .render()
    .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_index_renders_welcome_page() {
        let app = test::init_service(App::new().service(index)).await;
        let req = test::TestRequest::get().uri("/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert!(
            content_type.to_str().unwrap().starts_with("text/html"),
            "Content-Type should be text/html"
        );

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("Welcome API"));
    }

    #[actix_web::test]
    async fn test_index_ignores_query_params_and_headers() {
        let app = test::init_service(App::new().service(index)).await;
        let req = test::TestRequest::get()
            .uri("/?utm_source=test")
            .insert_header(("accept-language", "de-DE"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
