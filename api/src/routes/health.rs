use actix_web::HttpResponse;

use hl_shared::HealthResponse;

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "healthlink-api",
        env!("CARGO_PKG_VERSION"),
    ))
}
