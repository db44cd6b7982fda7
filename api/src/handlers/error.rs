//! Mapping from domain errors to HTTP responses
//!
//! Every failure leaves the API as an `ErrorResponse` JSON body with a stable
//! snake_case error code.

use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use validator::ValidationErrors;

use hl_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use hl_shared::{error_codes, ErrorResponse};

/// Status code, error code and message for a domain error
pub fn classify(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::Auth(auth_error) => classify_auth(auth_error),
        DomainError::Token(token_error) => {
            let code = match token_error {
                TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
                TokenError::TokenGenerationFailed => {
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        error_codes::INTERNAL_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
                TokenError::InvalidToken | TokenError::MissingToken => error_codes::INVALID_TOKEN,
            };
            (StatusCode::UNAUTHORIZED, code, token_error.to_string())
        }
        DomainError::ValidationErr(validation_error) => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            validation_error.to_string(),
        ),
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            message.clone(),
        ),
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            error_codes::RESOURCE_NOT_FOUND,
            format!("Resource not found: {}", resource),
        ),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "An internal error occurred".to_string(),
        ),
    }
}

fn classify_auth(error: &AuthError) -> (StatusCode, &'static str, String) {
    let (status, code) = match error {
        AuthError::EmailAlreadyRegistered => {
            (StatusCode::CONFLICT, error_codes::EMAIL_ALREADY_REGISTERED)
        }
        AuthError::LicenseAlreadyRegistered | AuthError::CredentialsAlreadyRegistered => {
            (StatusCode::CONFLICT, error_codes::LICENSE_ALREADY_REGISTERED)
        }
        AuthError::AccountNotFound => (StatusCode::NOT_FOUND, error_codes::ACCOUNT_NOT_FOUND),
        AuthError::AccountAlreadyVerified => {
            (StatusCode::CONFLICT, error_codes::ACCOUNT_ALREADY_VERIFIED)
        }
        AuthError::VerificationCodeExpired => {
            (StatusCode::BAD_REQUEST, error_codes::VERIFICATION_CODE_EXPIRED)
        }
        AuthError::InvalidVerificationCode => {
            (StatusCode::BAD_REQUEST, error_codes::INVALID_VERIFICATION_CODE)
        }
        AuthError::InvalidCredentials => {
            (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS)
        }
        AuthError::AccountNotActive => (StatusCode::FORBIDDEN, error_codes::ACCOUNT_NOT_ACTIVE),
        AuthError::InsufficientPermissions | AuthError::RoleMismatch { .. } => {
            (StatusCode::FORBIDDEN, error_codes::INSUFFICIENT_PERMISSIONS)
        }
        AuthError::NotResourceOwner => (StatusCode::FORBIDDEN, error_codes::NOT_RESOURCE_OWNER),
        AuthError::EmailDeliveryFailure => (
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::EMAIL_DELIVERY_FAILURE,
        ),
    };
    (status, code, error.to_string())
}

/// Convert a domain error into its JSON response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code, message) = classify(error);

    if status.is_server_error() {
        log::error!("Domain error: {:?}", error);
    } else {
        log::debug!("Request rejected: {}", error);
    }

    let mut body = ErrorResponse::new(code, message);
    if let DomainError::ValidationErr(validation_error) = error {
        body = body.add_detail(
            validation_error.field().to_string(),
            vec![validation_error.to_string()],
        );
    }
    HttpResponse::build(status).json(body)
}

/// 400 response listing the failing fields
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        body = body.add_detail(field.to_string(), messages);
    }

    HttpResponse::BadRequest().json(body)
}

/// Handler error type so routes can use `?` on service calls
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError(error)
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError(DomainError::Auth(error))
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError(DomainError::ValidationErr(error))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        classify(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}

/// Malformed JSON bodies get the same envelope as field validation failures
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Malformed request body")
            .add_detail("body", json!(err.to_string())),
    );
    actix_web::error::InternalError::from_response(err, response).into()
}
