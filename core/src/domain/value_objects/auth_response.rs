//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::{Account, Role};

/// Profile summary returned after verification and login
///
/// Carries the bearer token alongside the account fields the client needs to
/// route the user (role, health ID, whether the profile still needs completing).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id: Uuid,

    /// JWT access token for API authentication
    pub token: String,

    pub role: Role,

    pub name: String,

    pub email: String,

    pub health_id: String,

    pub is_active: bool,

    pub is_verification_complete: bool,
}

impl AuthResponse {
    /// Creates an authentication response from an account and its freshly issued token
    pub fn from_account(account: &Account, token: String) -> Self {
        Self {
            id: account.id,
            token,
            role: account.role,
            name: account.name.clone(),
            email: account.email.clone(),
            health_id: account.health_id.clone(),
            is_active: account.is_active,
            is_verification_complete: account.verification_complete,
        }
    }
}
