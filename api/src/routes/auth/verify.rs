use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_shared::validation::mask_email;

use crate::dto::VerifyRequest;
use crate::handlers::{handle_validation_errors, ApiError};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/verify
///
/// Checks the emailed code, activates the account and returns a bearer
/// token with the profile summary (`AuthResponse`).
///
/// # Responses
///
/// * `200 OK` with `{id, token, role, name, email, healthId, isActive, isVerificationComplete}`
/// * `400` wrong or expired code
/// * `404` unknown email
/// * `409` account already verified
pub async fn verify(
    state: web::Data<AppState>,
    request: web::Json<VerifyRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors));
    }

    log::info!("Processing verification for {}", mask_email(&request.email));

    let response = state
        .auth_service
        .verify(&request.email, &request.code)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
