use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_shared::validation::mask_email;
use hl_shared::MessageResponse;

use crate::dto::ChangePasswordRequest;
use crate::handlers::{handle_validation_errors, ApiError};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/change-password
///
/// Authenticates with the old password in the body rather than a token.
pub async fn change_password(
    state: web::Data<AppState>,
    request: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors));
    }

    log::info!("Processing password change for {}", mask_email(&request.email));

    state
        .auth_service
        .change_password(&request.email, &request.old_password, &request.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Password changed successfully.")))
}
