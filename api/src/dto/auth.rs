//! Authentication request bodies

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validators::{not_blank, verification_code};

/// `POST /auth/signup`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// `PATIENT` (default), `DOCTOR` or `PHARMACIST`
    #[serde(default)]
    pub role: Option<String>,
}

/// `POST /auth/verify`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Mobile clients send this as `verificationCode`
    #[serde(alias = "verificationCode")]
    #[validate(custom(function = "verification_code"))]
    pub code: String,
}

/// `POST /auth/resend-otp`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendOtpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// `POST /auth/change-password`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Current password is required"))]
    pub old_password: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_validation() {
        let valid = SignupRequest {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            password: "password123".into(),
            role: None,
        };
        assert!(valid.validate().is_ok());

        let invalid = SignupRequest {
            name: " ".into(),
            email: "not-an-email".into(),
            password: "short".into(),
            role: None,
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_verify_accepts_both_code_field_names() {
        let short: VerifyRequest =
            serde_json::from_str(r#"{"email":"a@b.com","code":"123456"}"#).unwrap();
        let long: VerifyRequest =
            serde_json::from_str(r#"{"email":"a@b.com","verificationCode":"123456"}"#).unwrap();

        assert_eq!(short.code, "123456");
        assert_eq!(long.code, "123456");
        assert!(long.validate().is_ok());
    }

    #[test]
    fn test_verify_rejects_malformed_code() {
        let request = VerifyRequest {
            email: "a@b.com".into(),
            code: "12ab56".into(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_change_password_uses_camel_case() {
        let request: ChangePasswordRequest = serde_json::from_str(
            r#"{"email":"a@b.com","oldPassword":"old-pass","newPassword":"new-password"}"#,
        )
        .unwrap();
        assert_eq!(request.old_password, "old-pass");
        assert!(request.validate().is_ok());
    }
}
