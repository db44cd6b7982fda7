//! Mail Service Module
//!
//! Transactional email for account verification:
//!
//! - **Templates**: verification code (one box per digit) and welcome emails
//! - **Mock transport**: logs messages for development and tests
//! - **HTTP transport**: JSON POST to a mail API with retries and a timeout
//!
//! Both transports implement `hl_core::services::MailServiceTrait`.

use std::sync::Arc;

use hl_core::services::MailServiceTrait;
use hl_shared::{MailConfig, MailProvider, VerificationConfig};

pub mod http_mail;
pub mod mock_mail;
pub mod templates;

#[cfg(test)]
mod tests;

pub use http_mail::HttpMailService;
pub use mock_mail::{MockMailService, SentEmail};
pub use templates::RenderedEmail;

use crate::InfrastructureError;

pub(crate) const DEFAULT_PRODUCT_NAME: &str = "HealthLink";

/// Create the mail transport selected by configuration
pub fn create_mail_service(
    config: &MailConfig,
    verification: &VerificationConfig,
) -> Result<Arc<dyn MailServiceTrait>, InfrastructureError> {
    let product = verification.product_name.clone();
    let expiry_minutes = verification.expiry_minutes();

    match config.provider {
        MailProvider::Mock => {
            tracing::info!("Using mock mail service");
            Ok(Arc::new(MockMailService::with_product(product, expiry_minutes)))
        }
        MailProvider::Http => {
            tracing::info!("Using HTTP mail service");
            Ok(Arc::new(HttpMailService::new(config, product, expiry_minutes)?))
        }
    }
}
