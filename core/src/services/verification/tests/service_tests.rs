//! Unit tests for verification service

use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::mocks::MockMailService;
use crate::errors::{AuthError, DomainError};
use crate::services::verification::{VerificationService, VerificationServiceConfig};

fn service(mail: &MockMailService) -> VerificationService {
    VerificationService::new(
        Arc::new(mail.clone()),
        VerificationServiceConfig {
            code_expiration_seconds: 120,
        },
    )
}

#[tokio::test]
async fn test_issue_and_deliver_code() {
    let mail = MockMailService::new();
    let service = service(&mail);

    let code = service.issue_code();
    assert_eq!((code.expires_at - code.created_at).num_seconds(), 120);

    let message_id = service.deliver_code("jane@example.com", &code).await.unwrap();
    assert!(message_id.starts_with("mock-msg-"));
    assert_eq!(mail.last_code_for("jane@example.com"), Some(code.code));
}

#[tokio::test]
async fn test_delivery_failure_is_surfaced() {
    let mail = MockMailService::failing();
    let service = service(&mail);

    let code = service.issue_code();
    let result = service.deliver_code("jane@example.com", &code).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailDeliveryFailure))
    ));
}

#[tokio::test]
async fn test_welcome_failure_is_swallowed() {
    let mail = MockMailService::new();
    mail.fail_welcome.store(true, Ordering::SeqCst);
    let service = service(&mail);

    service.send_welcome("jane@example.com", "Jane").await;
    assert_eq!(mail.welcome_count(), 0);
}
