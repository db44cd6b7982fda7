//! Unit tests for verification codes

use chrono::{Duration, Utc};

use crate::domain::entities::verification_code::{
    VerificationCode, CODE_LENGTH, DEFAULT_EXPIRATION_SECONDS,
};

#[test]
fn test_code_is_six_digits_in_range() {
    for _ in 0..200 {
        let code = VerificationCode::new();
        assert_eq!(code.code.len(), CODE_LENGTH);
        let value: u32 = code.code.parse().unwrap();
        assert!((100_000..=999_999).contains(&value));
    }
}

#[test]
fn test_default_expiry_window() {
    let code = VerificationCode::new();
    assert_eq!(
        (code.expires_at - code.created_at).num_seconds(),
        DEFAULT_EXPIRATION_SECONDS
    );
    assert!(!code.is_expired_at(Utc::now()));
    assert!(code.is_expired_at(code.expires_at + Duration::seconds(1)));
}

#[test]
fn test_matches_is_exact() {
    assert!(VerificationCode::matches("123456", "123456"));
    assert!(VerificationCode::matches("123456", " 123456 "));
    assert!(!VerificationCode::matches("123456", "123457"));
    assert!(!VerificationCode::matches("123456", "12345"));
}
