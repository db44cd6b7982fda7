//! Error type definitions for authentication, token management and validation.
//!
//! Messages here are developer-facing. The HTTP layer maps each variant to a
//! status code and a stable error code.

use thiserror::Error;

/// Account lifecycle and access errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Account is already verified")]
    AccountAlreadyVerified,

    #[error("Verification code expired")]
    VerificationCodeExpired,

    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is not active. Please verify your email")]
    AccountNotActive,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Access is limited to the resource owner")]
    NotResourceOwner,

    #[error("Failed to deliver email")]
    EmailDeliveryFailure,

    #[error("License number is already registered")]
    LicenseAlreadyRegistered,

    #[error("Credentials are already registered for this account")]
    CredentialsAlreadyRegistered,

    #[error("Operation requires the {expected} role")]
    RoleMismatch { expected: String },
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length: {field} (min: {min})")]
    TooShort { field: String, min: usize },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid role: {value}")]
    InvalidRole { value: String },
}

impl ValidationError {
    /// Name of the offending field, if the variant carries one
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::TooShort { field, .. } => field,
            ValidationError::InvalidEmail => "email",
            ValidationError::InvalidRole { .. } => "role",
        }
    }
}
