//! bcrypt implementation of the password hashing seam.
//!
//! Hashing is CPU bound, so both operations run on the blocking pool to keep
//! actix workers responsive.

use async_trait::async_trait;

use hl_core::services::PasswordHasherTrait;

/// bcrypt password hasher with a configurable cost
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Hasher with an explicit cost (4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self {
            cost: cost.clamp(4, 31),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasherTrait for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, String> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| format!("Hashing task failed: {}", e))?
            .map_err(|e| format!("Failed to hash password: {}", e))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, String> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| format!("Verification task failed: {}", e))?
            .map_err(|e| format!("Failed to verify password: {}", e))
    }
}
