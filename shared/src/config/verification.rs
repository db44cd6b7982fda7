//! Verification code configuration

use serde::{Deserialize, Serialize};

/// One-time verification code settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Seconds a freshly issued code stays valid
    pub code_expiry_seconds: i64,

    /// Product name used in outgoing emails
    #[serde(default = "default_product_name")]
    pub product_name: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_expiry_seconds: 120,
            product_name: default_product_name(),
        }
    }
}

impl VerificationConfig {
    /// Read `VERIFICATION_CODE_EXPIRY_SECONDS`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(expiry) = std::env::var("VERIFICATION_CODE_EXPIRY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.code_expiry_seconds = expiry;
        }
        config
    }

    /// Expiry expressed in whole minutes, rounded up
    pub fn expiry_minutes(&self) -> i64 {
        (self.code_expiry_seconds + 59) / 60
    }
}

fn default_product_name() -> String {
    String::from("HealthLink")
}
