//! Shared error response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Create an error response with details
    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details),
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes returned in `ErrorResponse::error`
pub mod error_codes {
    pub const EMAIL_ALREADY_REGISTERED: &str = "email_already_registered";
    pub const LICENSE_ALREADY_REGISTERED: &str = "license_already_registered";
    pub const ACCOUNT_NOT_FOUND: &str = "account_not_found";
    pub const RESOURCE_NOT_FOUND: &str = "resource_not_found";
    pub const ACCOUNT_ALREADY_VERIFIED: &str = "account_already_verified";
    pub const VERIFICATION_CODE_EXPIRED: &str = "verification_code_expired";
    pub const INVALID_CREDENTIALS: &str = "invalid_credentials";
    pub const INVALID_VERIFICATION_CODE: &str = "invalid_verification_code";
    pub const ACCOUNT_NOT_ACTIVE: &str = "account_not_active";
    pub const INSUFFICIENT_PERMISSIONS: &str = "insufficient_permissions";
    pub const NOT_RESOURCE_OWNER: &str = "not_resource_owner";
    pub const TOKEN_EXPIRED: &str = "token_expired";
    pub const INVALID_TOKEN: &str = "invalid_token";
    pub const EMAIL_DELIVERY_FAILURE: &str = "email_delivery_failure";
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const INTERNAL_ERROR: &str = "internal_error";
    pub const HTTPS_REQUIRED: &str = "https_required";
}
