//! CORS configuration for the mobile app and web clients.
//!
//! Development allows any origin; production restricts origins to the
//! configured list. The public profile card is open to every origin.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use hl_shared::CorsConfig;

fn allowed_methods() -> Vec<Method> {
    vec![Method::GET, Method::POST, Method::OPTIONS]
}

/// Creates the CORS middleware for the API scope.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        log::info!("Configuring CORS for any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in config
            .allowed_origins
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
        {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials && !config.allows_any_origin() {
        cors = cors.supports_credentials();
    }

    cors
}

/// CORS for the unauthenticated profile card, reachable from any scanner app.
pub fn create_public_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT])
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_rt::test]
    async fn test_listed_origin_is_allowed() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.healthlink.example".to_string()],
            allow_credentials: true,
            max_age: 600,
        };
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/ping", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/ping")
            .insert_header((header::ORIGIN, "https://app.healthlink.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("https://app.healthlink.example")
        );
    }

    #[actix_rt::test]
    async fn test_public_cors_echoes_any_origin() {
        let app = test::init_service(
            App::new()
                .wrap(create_public_cors())
                .route("/card", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/card")
            .insert_header((header::ORIGIN, "https://scanner.example.org"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
