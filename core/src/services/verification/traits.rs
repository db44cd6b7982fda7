//! Mail transport integration

use async_trait::async_trait;

/// Trait for email delivery
///
/// Both methods return a transport message id on success and a transport
/// error description on failure.
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Send the one-time verification code
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;

    /// Send the post-activation welcome email
    async fn send_welcome(&self, email: &str, name: &str) -> Result<String, String>;
}
