//! In-memory implementation of CredentialRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::credential::Credential;
use crate::errors::{AuthError, DomainError};

use super::trait_::CredentialRepository;

/// Mock credential repository keyed by account id
#[derive(Clone, Default)]
pub struct MockCredentialRepository {
    records: Arc<RwLock<HashMap<Uuid, Credential>>>,
}

impl MockCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepository for MockCredentialRepository {
    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<Credential>, DomainError> {
        Ok(self.records.read().await.get(&account_id).cloned())
    }

    async fn license_exists(&self, license_number: &str) -> Result<bool, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .any(|c| c.license_number().eq_ignore_ascii_case(license_number.trim())))
    }

    async fn create(&self, credential: Credential) -> Result<Credential, DomainError> {
        let mut records = self.records.write().await;

        if records
            .values()
            .any(|c| c.license_number().eq_ignore_ascii_case(credential.license_number()))
        {
            return Err(AuthError::LicenseAlreadyRegistered.into());
        }
        if records.contains_key(&credential.account_id()) {
            return Err(AuthError::CredentialsAlreadyRegistered.into());
        }

        records.insert(credential.account_id(), credential.clone());
        Ok(credential)
    }
}
