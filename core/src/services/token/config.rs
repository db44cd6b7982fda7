//! Configuration for the token service

use hl_shared::config::JwtConfig;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub expiry_seconds: i64,
    pub issuer: String,
    pub audience: String,
    /// Clock skew tolerated when checking `exp` / `nbf`
    pub leeway_seconds: u64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            expiry_seconds: 86400,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
            leeway_seconds: 0,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            expiry_seconds: config.expiry_seconds,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            leeway_seconds: 0,
        }
    }
}
