//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_SECRET: &str = "healthlink-dev-secret-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for HS256 signing
    pub secret: String,

    /// Access token lifetime in seconds
    #[serde(default = "default_expiry_seconds")]
    pub expiry_seconds: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// JWT audience claim
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            expiry_seconds: default_expiry_seconds(),
            issuer: default_issuer(),
            audience: default_audience(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.expiry_seconds = hours * 3600;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }

    /// Read `JWT_SECRET` and `JWT_EXPIRY_SECONDS`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(secret) = env::var("JWT_SECRET") {
            config.secret = secret;
        }
        if let Some(expiry) = env::var("JWT_EXPIRY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.expiry_seconds = expiry;
        }
        config
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
        }
    }
}

fn default_expiry_seconds() -> i64 {
    86400 // 24 hours
}

fn default_issuer() -> String {
    String::from("healthlink")
}

fn default_audience() -> String {
    String::from("healthlink-api")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_defaults() {
        let config = JwtConfig::default();
        assert_eq!(config.expiry_seconds, 86400);
        assert_eq!(config.issuer, "healthlink");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_custom_secret_and_expiry() {
        let config = JwtConfig::new("another-secret-of-sufficient-length").with_expiry_hours(2);
        assert!(!config.is_using_default_secret());
        assert_eq!(config.expiry_seconds, 7200);
    }
}
