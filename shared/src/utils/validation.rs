//! Common validation and normalization helpers

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

static CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("code regex is valid"));

/// Check whether an address is syntactically a valid email
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Canonical form used as the account key: trimmed and lower-cased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Exactly six ASCII digits
pub fn is_verification_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Mask an email for logging, keeping the first character and the domain
///
/// `john@example.com` becomes `j***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => String::from("***"),
    }
}

/// Common validation predicates
pub mod validators {
    /// Check if a string is not empty after trimming
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("  jane.doe+hl@mail.example.org "));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jane@Example.COM "), "jane@example.com");
    }

    #[test]
    fn test_verification_code_shape() {
        assert!(is_verification_code("123456"));
        assert!(!is_verification_code("12345"));
        assert!(!is_verification_code("12345a"));
        assert!(!is_verification_code("1234567"));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("john@example.com"), "j***@example.com");
        assert_eq!(mask_email("@example.com"), "***@example.com");
        assert_eq!(mask_email("garbage"), "***");
    }

    #[test]
    fn test_validators() {
        assert!(validators::not_blank(" a "));
        assert!(!validators::not_blank("   "));
        assert!(validators::length_between("abcdefgh", 8, 128));
    }
}
