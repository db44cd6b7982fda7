//! Route handlers grouped by resource
//!
//! Handlers receive the shared [`AppState`] and return either a JSON body or
//! an [`ApiError`](crate::handlers::ApiError) that renders as an
//! `ErrorResponse`.

use std::sync::Arc;

use hl_core::services::{AuthService, CredentialService, ProfileService, TokenService};

pub mod auth;
pub mod credentials;
pub mod doctor;
pub mod health;
pub mod patient;
pub mod pharmacist;
pub mod public;

/// Application state shared by all workers
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub profile_service: Arc<ProfileService>,
    pub credential_service: Arc<CredentialService>,
    pub token_service: Arc<TokenService>,
    /// Base URL prefixed to public profile links
    pub public_base_url: String,
}
