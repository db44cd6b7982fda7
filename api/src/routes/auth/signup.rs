use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_core::{Role, SignupCommand};
use hl_shared::validation::mask_email;
use hl_shared::ApiResponse;

use crate::dto::SignupRequest;
use crate::handlers::{handle_validation_errors, ApiError};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/signup
///
/// Creates an unverified account (or refreshes an unverified one with the
/// same email) and mails a verification code.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Jane Perera",
///     "email": "jane@example.com",
///     "password": "s3cretpass",
///     "role": "PATIENT"
/// }
/// ```
///
/// # Responses
///
/// * `201 Created` with the account id, health ID and code expiry
/// * `400` validation error or unknown role
/// * `409` email already registered to an active account
/// * `503` verification email could not be delivered
pub async fn signup(
    state: web::Data<AppState>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for signup of {}", mask_email(&request.email));
        return Ok(handle_validation_errors(&errors));
    }

    let role = request
        .role
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::parse::<Role>)
        .transpose()?;

    log::info!("Processing signup for {}", mask_email(&request.email));

    let outcome = state
        .auth_service
        .signup(SignupCommand {
            name: request.name,
            email: request.email,
            password: request.password,
            role,
        })
        .await?;

    Ok(HttpResponse::Created().json(
        ApiResponse::success(outcome)
            .with_message("User registered successfully. Please verify your email."),
    ))
}
