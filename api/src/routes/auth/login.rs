use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_shared::validation::mask_email;

use crate::dto::LoginRequest;
use crate::handlers::{handle_validation_errors, ApiError};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/login
///
/// # Responses
///
/// * `200 OK` with the `AuthResponse` profile summary and token
/// * `401` unknown email or wrong password
/// * `403` account not yet verified
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors));
    }

    log::info!("Processing login for {}", mask_email(&request.email));

    let response = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
