//! Unauthenticated profile card behind the QR code

use actix_web::{http::header::ContentType, web, HttpResponse};

use hl_core::services::profile::render_not_found;

use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for GET /api/v1/public/patient/{id}
///
/// Renders an HTML card for a health ID or account id; unknown ids get a
/// 404 HTML page rather than JSON.
pub async fn patient_card(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let response = match state.profile_service.render_public_profile(&id).await? {
        Some(html) => HttpResponse::Ok().content_type(ContentType::html()).body(html),
        None => {
            log::debug!("Public profile not found for {}", id);
            HttpResponse::NotFound()
                .content_type(ContentType::html())
                .body(render_not_found())
        }
    };

    Ok(response)
}
