//! Unit tests for the mock mail service

use hl_core::services::MailServiceTrait;

use crate::mail::MockMailService;

#[tokio::test]
async fn test_mock_mail_send_success() {
    let service = MockMailService::new();

    let message_id = service
        .send_verification_code("jane@example.com", "123456")
        .await
        .unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);

    let sent = service.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "jane@example.com");
    assert!(sent[0].email.text.contains("123456"));
}

#[tokio::test]
async fn test_mock_mail_simulate_failure() {
    let service = MockMailService::new();
    service.set_simulate_failure(true);

    let result = service.send_welcome("jane@example.com", "Jane").await;
    assert!(result.is_err());
    assert_eq!(service.get_message_count(), 0);

    service.set_simulate_failure(false);
    assert!(service.send_welcome("jane@example.com", "Jane").await.is_ok());
}

#[tokio::test]
async fn test_mock_mail_counter() {
    let service = MockMailService::new();

    for i in 1..=3 {
        service
            .send_verification_code("jane@example.com", "654321")
            .await
            .unwrap();
        assert_eq!(service.get_message_count(), i);
    }

    service.reset_counter();
    assert_eq!(service.get_message_count(), 0);
    assert!(service.sent().is_empty());
}

#[tokio::test]
async fn test_clones_share_state() {
    let service = MockMailService::new();
    let clone = service.clone();

    clone.send_welcome("jane@example.com", "Jane").await.unwrap();
    assert_eq!(service.get_message_count(), 1);
}
