//! Application factory
//!
//! Wires shared state, JSON limits, middleware and every route under
//! `/api/v1`. Used by `main` and by the integration tests.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use hl_core::TokenService;
use hl_shared::{error_codes, CorsConfig, Environment, ErrorResponse};

use crate::handlers::json_error_handler;
use crate::middleware::{create_cors, create_public_cors, JwtAuth, SecurityMiddleware};
use crate::routes::{auth, credentials, doctor, health, patient, pharmacist, public, AppState};

/// HTTP-level settings taken from the application configuration
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub environment: Environment,
    pub cors: CorsConfig,
    pub max_payload_size: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            cors: CorsConfig::development(),
            max_payload_size: 1024 * 1024,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    settings: &HttpSettings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let token_service: Arc<TokenService> = Arc::clone(&state.token_service);
    let jwt = move || JwtAuth::new(Arc::clone(&token_service));

    let json_config = web::JsonConfig::default()
        .limit(settings.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(state)
        .app_data(json_config)
        // Outermost first: access log, then HTTPS and headers
        .wrap(SecurityMiddleware::for_environment(settings.environment))
        .wrap(Logger::default())
        .route("/health", web::get().to(health::health_check))
        // Registered before `/api/v1` so the open CORS policy applies
        .service(
            web::scope("/api/v1/public")
                .wrap(create_public_cors())
                .route("/patient/{id}", web::get().to(public::patient_card)),
        )
        .service(
            web::scope("/api/v1")
                .wrap(create_cors(&settings.cors))
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(auth::signup))
                        .route("/verify", web::post().to(auth::verify))
                        .route("/resend-otp", web::post().to(auth::resend_otp))
                        .route("/login", web::post().to(auth::login))
                        .route("/change-password", web::post().to(auth::change_password)),
                )
                .service(
                    web::scope("/patient")
                        .wrap(jwt())
                        .route("/profile", web::get().to(patient::get_profile))
                        .route("/complete-profile", web::post().to(patient::complete_profile))
                        .route("/{id}/records", web::get().to(patient::records)),
                )
                .service(
                    web::scope("/doctor")
                        .wrap(jwt())
                        .route("/patient/{health_id}", web::get().to(doctor::get_patient))
                        .route("/credentials", web::post().to(doctor::register_credentials)),
                )
                .service(
                    web::scope("/pharmacist")
                        .wrap(jwt())
                        .route(
                            "/credentials",
                            web::post().to(pharmacist::register_credentials),
                        ),
                )
                .service(
                    web::scope("/credentials")
                        .wrap(jwt())
                        .route("/me", web::get().to(credentials::get_own)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::RESOURCE_NOT_FOUND,
        "The requested resource was not found",
    ))
}
