//! Input and output types for the authentication service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::Role;

/// Signup request as seen by the service
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to `Role::Patient` when absent
    pub role: Option<Role>,
}

/// Result of a signup or resend: where the code went and until when it is valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupOutcome {
    pub account_id: Uuid,
    pub email: String,
    pub health_id: String,
    pub role: Role,
    pub code_expires_at: DateTime<Utc>,
    /// True when an unverified account was overwritten rather than created
    pub reused_existing: bool,
}
