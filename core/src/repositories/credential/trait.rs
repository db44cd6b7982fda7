//! Credential repository trait for doctor and pharmacist license records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::credential::Credential;
use crate::errors::DomainError;

/// Repository trait for professional credential records
///
/// License numbers are unique across both record kinds, and an account owns
/// at most one record.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// The record linked to an account, if any
    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<Credential>, DomainError>;

    /// Whether a license / registration number is already on file
    async fn license_exists(&self, license_number: &str) -> Result<bool, DomainError>;

    /// Insert a record
    ///
    /// Fails with `AuthError::LicenseAlreadyRegistered` on a duplicate number and
    /// `AuthError::CredentialsAlreadyRegistered` when the account already has one.
    async fn create(&self, credential: Credential) -> Result<Credential, DomainError>;
}
