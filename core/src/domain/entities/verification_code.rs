//! One-time email verification code.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::Rng;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of a verification code (2 minutes)
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 120;

const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;

/// A freshly issued verification code and its expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    /// Six decimal digits, never starting with zero
    pub code: String,

    pub created_at: DateTime<Utc>,

    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Issues a code valid for the default window
    pub fn new() -> Self {
        Self::with_expiry_seconds(DEFAULT_EXPIRATION_SECONDS)
    }

    /// Issues a code valid for `seconds` from now
    pub fn with_expiry_seconds(seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::seconds(seconds),
        }
    }

    /// Draws a code uniformly from 100000..=999999 using the OS RNG
    fn generate_code() -> String {
        OsRng.gen_range(CODE_MIN..=CODE_MAX).to_string()
    }

    /// `now > expires_at`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Constant-time comparison of a stored and a submitted code
    pub fn matches(stored: &str, submitted: &str) -> bool {
        constant_time_eq::constant_time_eq(stored.as_bytes(), submitted.trim().as_bytes())
    }
}

impl Default for VerificationCode {
    fn default() -> Self {
        Self::new()
    }
}
