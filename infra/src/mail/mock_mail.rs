//! Mock mail transport for development and testing
//!
//! Logs messages instead of sending them. Codes are printed in full so a
//! developer can complete signup locally.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use hl_core::services::MailServiceTrait;
use hl_shared::validation::mask_email;

use super::templates::{self, RenderedEmail};
use super::DEFAULT_PRODUCT_NAME;

/// A message captured by the mock transport
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub message_id: String,
    pub to: String,
    pub email: RenderedEmail,
}

/// Mock mail service
#[derive(Clone)]
pub struct MockMailService {
    message_count: Arc<AtomicU64>,
    simulate_failure: Arc<AtomicBool>,
    outbox: Arc<Mutex<Vec<SentEmail>>>,
    product: String,
    expiry_minutes: i64,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::with_product(DEFAULT_PRODUCT_NAME, 2)
    }

    /// Mock service rendering with a given product name and code lifetime
    pub fn with_product(product: impl Into<String>, expiry_minutes: i64) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(false)),
            outbox: Arc::new(Mutex::new(Vec::new())),
            product: product.into(),
            expiry_minutes,
        }
    }

    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.clear();
        }
    }

    /// Make every subsequent send fail
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Messages sent so far, oldest first
    pub fn sent(&self) -> Vec<SentEmail> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }

    fn deliver(&self, to: &str, email: RenderedEmail) -> Result<String, String> {
        let masked = mask_email(to);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(provider = "mock", email = %masked, "Simulating mail delivery failure");
            return Err("Simulated mail delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "mail_service",
            provider = "mock",
            email = %masked,
            message_id = %message_id,
            count,
            subject = %email.subject,
            "Mail sent (mock): {}",
            email.text
        );

        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(SentEmail {
                message_id: message_id.clone(),
                to: to.to_string(),
                email,
            });
        }

        Ok(message_id)
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        let rendered = templates::verification_email(&self.product, code, self.expiry_minutes);
        self.deliver(email, rendered)
    }

    async fn send_welcome(&self, email: &str, name: &str) -> Result<String, String> {
        let rendered = templates::welcome_email(&self.product, name);
        self.deliver(email, rendered)
    }
}
