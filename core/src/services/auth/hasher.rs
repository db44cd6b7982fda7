//! Password hashing seam

use async_trait::async_trait;

/// One-way password hashing
#[async_trait]
pub trait PasswordHasherTrait: Send + Sync {
    /// Hash a plaintext password
    async fn hash(&self, password: &str) -> Result<String, String>;

    /// Check a plaintext password against a stored hash
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, String>;
}

/// Reversible stand-in for tests; never use outside of them
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPasswordHasher;

const MOCK_PREFIX: &str = "mock$";

#[async_trait]
impl PasswordHasherTrait for MockPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, String> {
        Ok(format!("{}{}", MOCK_PREFIX, password))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, String> {
        match hash.strip_prefix(MOCK_PREFIX) {
            Some(stored) => Ok(stored == password),
            None => Err("hash was not produced by MockPasswordHasher".to_string()),
        }
    }
}
