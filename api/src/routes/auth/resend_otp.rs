use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_shared::validation::mask_email;
use hl_shared::ApiResponse;

use crate::dto::ResendOtpRequest;
use crate::handlers::{handle_validation_errors, ApiError};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/resend-otp
///
/// Issues a fresh code for an unverified account. The previous code stops
/// working immediately.
pub async fn resend_otp(
    state: web::Data<AppState>,
    request: web::Json<ResendOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors));
    }

    log::info!("Processing code resend for {}", mask_email(&request.email));

    let outcome = state.auth_service.resend(&request.email).await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::success(outcome).with_message("Verification code resent successfully.")))
}
