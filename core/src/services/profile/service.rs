//! Profile service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::account::{Account, ProfileDetails};
use crate::domain::entities::health_id::HealthId;
use crate::domain::value_objects::{OwnProfile, PatientProfile};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;

use super::render::render_profile_card;

/// Reads and completes patient profiles
pub struct ProfileService {
    account_repository: Arc<dyn AccountRepository>,
}

impl ProfileService {
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }

    /// Resolve a health ID or account id to an account
    ///
    /// Health IDs are tried first; anything that parses as a UUID falls back
    /// to an id lookup.
    async fn resolve(&self, health_id_or_id: &str) -> DomainResult<Option<Account>> {
        let key = health_id_or_id.trim();

        if HealthId::looks_like(key) {
            if let Some(account) = self.account_repository.find_by_health_id(key).await? {
                return Ok(Some(account));
            }
        }

        match Uuid::parse_str(key) {
            Ok(id) => self.account_repository.find_by_id(id).await,
            Err(_) => Ok(None),
        }
    }

    /// Profile of a patient addressed by health ID or account id
    pub async fn get_patient_profile(&self, health_id_or_id: &str) -> DomainResult<PatientProfile> {
        let account = self
            .resolve(health_id_or_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Patient {}", health_id_or_id),
            })?;

        tracing::info!(
            health_id = %account.health_id,
            event = "patient_profile_viewed",
            "Patient profile read"
        );
        Ok(PatientProfile::from(&account))
    }

    /// The caller's own summary and profile
    pub async fn get_own_profile(&self, account_id: Uuid) -> DomainResult<OwnProfile> {
        let account = self.require(account_id).await?;
        Ok(OwnProfile::from(&account))
    }

    /// Overwrite profile fields and mark the profile complete
    pub async fn complete_profile(
        &self,
        account_id: Uuid,
        profile: ProfileDetails,
    ) -> DomainResult<OwnProfile> {
        let mut account = self.require(account_id).await?;
        account.complete_profile(profile);
        let account = self.account_repository.update(account).await?;

        tracing::info!(
            account_id = %account.id,
            event = "profile_completed",
            "Profile completed"
        );
        Ok(OwnProfile::from(&account))
    }

    /// Acknowledgement for a self-scoped records request
    pub async fn records_access_message(&self, account_id: Uuid) -> DomainResult<String> {
        let account = self.require(account_id).await?;
        Ok(format!(
            "Access granted for {} (Role: {}). Viewing records for ID: {}.",
            account.name, account.role, account.id
        ))
    }

    /// Public HTML card, or `None` when no such account exists
    pub async fn render_public_profile(&self, health_id_or_id: &str) -> DomainResult<Option<String>> {
        Ok(self
            .resolve(health_id_or_id)
            .await?
            .map(|account| render_profile_card(&account)))
    }

    async fn require(&self, account_id: Uuid) -> DomainResult<Account> {
        self.account_repository
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AuthError::AccountNotFound.into())
    }
}
