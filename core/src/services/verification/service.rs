//! Main verification service implementation

use std::sync::Arc;

use hl_shared::validation::mask_email;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{AuthError, DomainError, DomainResult};

use super::config::VerificationServiceConfig;
use super::traits::MailServiceTrait;

/// Issues verification codes and hands them to the mail transport
pub struct VerificationService {
    /// Mail transport for outgoing messages
    mail_service: Arc<dyn MailServiceTrait>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl VerificationService {
    pub fn new(mail_service: Arc<dyn MailServiceTrait>, config: VerificationServiceConfig) -> Self {
        Self {
            mail_service,
            config,
        }
    }

    /// Generate a new code with the configured expiry
    pub fn issue_code(&self) -> VerificationCode {
        VerificationCode::with_expiry_seconds(self.config.code_expiration_seconds)
    }

    /// Deliver a code; transport failures become `EmailDeliveryFailure`
    pub async fn deliver_code(&self, email: &str, code: &VerificationCode) -> DomainResult<String> {
        match self
            .mail_service
            .send_verification_code(email, &code.code)
            .await
        {
            Ok(message_id) => {
                tracing::info!(
                    email = %mask_email(email),
                    message_id = %message_id,
                    expires_at = %code.expires_at,
                    event = "otp_sent",
                    "Verification code sent"
                );
                Ok(message_id)
            }
            Err(e) => {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to send verification code"
                );
                Err(DomainError::Auth(AuthError::EmailDeliveryFailure))
            }
        }
    }

    /// Send the welcome email; failures are logged and swallowed
    pub async fn send_welcome(&self, email: &str, name: &str) {
        if let Err(e) = self.mail_service.send_welcome(email, name).await {
            tracing::warn!(
                email = %mask_email(email),
                error = %e,
                event = "welcome_email_failed",
                "Failed to send welcome email"
            );
        }
    }
}
