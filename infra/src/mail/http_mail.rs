//! HTTP mail transport
//!
//! Posts each message as JSON to a transactional mail API authenticated with
//! a bearer key. Server errors, throttling and connection failures are retried
//! with exponential backoff up to `max_retries` attempts; other client errors
//! fail immediately.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use hl_core::services::MailServiceTrait;
use hl_shared::validation::mask_email;
use hl_shared::MailConfig;

use super::templates::{self, RenderedEmail};
use crate::InfrastructureError;

/// JSON body sent to the mail API
#[derive(Debug, Serialize)]
pub(crate) struct MailPayload<'a> {
    pub from: Address<'a>,
    pub to: Vec<Address<'a>>,
    pub subject: &'a str,
    pub html: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct Address<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

/// Mail service backed by an HTTP API
pub struct HttpMailService {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    from_address: String,
    from_name: String,
    max_retries: u32,
    retry_delay: Duration,
    product: String,
    expiry_minutes: i64,
}

impl HttpMailService {
    /// Build the transport; fails when no API URL is configured
    pub fn new(
        config: &MailConfig,
        product: impl Into<String>,
        expiry_minutes: i64,
    ) -> Result<Self, InfrastructureError> {
        let api_url = config
            .api_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                InfrastructureError::Config("HTTP mail provider requires an API URL".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_url,
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
            from_name: config.from_name.clone(),
            max_retries: config.max_retries.max(1),
            retry_delay: Duration::from_millis(500),
            product: product.into(),
            expiry_minutes,
        })
    }

    /// Override the initial backoff delay
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub(crate) fn payload<'a>(&'a self, to: &'a str, email: &'a RenderedEmail) -> MailPayload<'a> {
        MailPayload {
            from: Address {
                email: &self.from_address,
                name: Some(&self.from_name),
            },
            to: vec![Address {
                email: to,
                name: None,
            }],
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
        }
    }

    fn is_retryable(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }

    async fn send_with_retry(
        &self,
        to: &str,
        email: &RenderedEmail,
    ) -> Result<String, InfrastructureError> {
        let payload = self.payload(to, email);
        let masked = mask_email(to);
        let mut attempts = 0;
        let mut delay = self.retry_delay;

        loop {
            attempts += 1;
            debug!(
                "Sending mail attempt {}/{} to {}",
                attempts, self.max_retries, masked
            );

            let mut request = self.client.post(&self.api_url).json(&payload);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let failure = match request.send().await {
                Ok(response) if response.status().is_success() => {
                    let message_id = response
                        .json::<serde_json::Value>()
                        .await
                        .ok()
                        .and_then(|body| {
                            body.get("id")
                                .and_then(|id| id.as_str())
                                .map(str::to_string)
                        })
                        .unwrap_or_else(|| Uuid::new_v4().to_string());

                    info!(
                        provider = "http",
                        email = %masked,
                        message_id = %message_id,
                        "Mail sent"
                    );
                    return Ok(message_id);
                }
                Ok(response) => {
                    let status = response.status();
                    if !Self::is_retryable(status) {
                        error!(provider = "http", email = %masked, %status, "Mail API rejected message");
                        return Err(InfrastructureError::Mail(format!(
                            "Mail API rejected request with status {}",
                            status
                        )));
                    }
                    format!("status {}", status)
                }
                Err(e) => e.to_string(),
            };

            error!(
                "Failed to send mail (attempt {}/{}): {}",
                attempts, self.max_retries, failure
            );

            if attempts >= self.max_retries {
                return Err(InfrastructureError::Mail(format!(
                    "Failed to send mail after {} attempts: {}",
                    self.max_retries, failure
                )));
            }

            warn!("Retrying mail delivery after {:?}", delay);
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

#[async_trait]
impl MailServiceTrait for HttpMailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        let rendered = templates::verification_email(&self.product, code, self.expiry_minutes);
        self.send_with_retry(email, &rendered)
            .await
            .map_err(|e| e.to_string())
    }

    async fn send_welcome(&self, email: &str, name: &str) -> Result<String, String> {
        let rendered = templates::welcome_email(&self.product, name);
        self.send_with_retry(email, &rendered)
            .await
            .map_err(|e| e.to_string())
    }
}
