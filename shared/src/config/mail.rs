//! Email transport configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Which mail transport to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Logs messages instead of sending them
    #[default]
    Mock,
    /// Posts messages to an HTTP mail API
    Http,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(MailProvider::Mock),
            "http" => Ok(MailProvider::Http),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// Mail configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Transport selection
    #[serde(default)]
    pub provider: MailProvider,

    /// Endpoint of the HTTP mail API
    #[serde(default)]
    pub api_url: Option<String>,

    /// Bearer key for the HTTP mail API
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender address
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Sender display name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Attempts per message before giving up
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::default(),
            api_url: None,
            api_key: None,
            from_address: default_from_address(),
            from_name: default_from_name(),
            max_retries: default_max_retries(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl MailConfig {
    /// Read `MAIL_PROVIDER`, `MAIL_API_URL`, `MAIL_API_KEY` and `MAIL_FROM`
    pub fn from_env(fallback: MailProvider) -> Self {
        let provider = env::var("MAIL_PROVIDER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(fallback);

        Self {
            provider,
            api_url: env::var("MAIL_API_URL").ok(),
            api_key: env::var("MAIL_API_KEY").ok(),
            from_address: env::var("MAIL_FROM").unwrap_or_else(|_| default_from_address()),
            ..Default::default()
        }
    }
}

fn default_from_address() -> String {
    String::from("no-reply@healthlink.local")
}

fn default_from_name() -> String {
    String::from("HealthLink")
}

fn default_max_retries() -> u32 {
    3
}

fn default_timeout_seconds() -> u64 {
    10
}
