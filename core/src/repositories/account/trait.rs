//! Account repository trait defining the interface for account persistence.
//!
//! Emails passed to the lookup methods are expected in normalized form
//! (trimmed, lower-cased); the services normalize before calling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its normalized email
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account registered with this email
    /// * `Err(DomainError)` - Storage error
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by its health ID (e.g. `HL-PNT01`)
    async fn find_by_health_id(&self, health_id: &str) -> Result<Option<Account>, DomainError>;

    /// Insert a new account
    ///
    /// Fails with `AuthError::EmailAlreadyRegistered` when the email is taken.
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Persist all mutable fields of an existing account
    ///
    /// Fails with `DomainError::NotFound` if the account does not exist.
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
