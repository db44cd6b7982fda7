//! Credential registry implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::account::{Account, Role};
use crate::domain::entities::credential::{Credential, DoctorCredential, PharmacistCredential};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{AccountRepository, CredentialRepository};

/// Doctor license submission
#[derive(Debug, Clone)]
pub struct DoctorRegistration {
    pub medical_reg_number: String,
    pub specialization: String,
    pub hospital_affiliation: Option<String>,
}

/// Pharmacist license submission
#[derive(Debug, Clone)]
pub struct PharmacistRegistration {
    pub pharmacy_license_number: String,
    pub pharmacy_name: String,
    pub pharmacy_branch_location: Option<String>,
}

/// Links professional credentials to active doctor / pharmacist accounts
pub struct CredentialService {
    account_repository: Arc<dyn AccountRepository>,
    credential_repository: Arc<dyn CredentialRepository>,
}

impl CredentialService {
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        credential_repository: Arc<dyn CredentialRepository>,
    ) -> Self {
        Self {
            account_repository,
            credential_repository,
        }
    }

    /// Record a doctor's medical registration
    pub async fn register_doctor(
        &self,
        account_id: Uuid,
        registration: DoctorRegistration,
    ) -> DomainResult<DoctorCredential> {
        self.check_eligible(account_id, Role::Doctor, &registration.medical_reg_number)
            .await?;

        let credential = DoctorCredential::new(
            account_id,
            registration.medical_reg_number,
            registration.specialization,
            registration.hospital_affiliation,
        );
        self.credential_repository
            .create(Credential::Doctor(credential.clone()))
            .await?;

        Self::log_registered(&account_id, Role::Doctor);
        Ok(credential)
    }

    /// Record a pharmacist's pharmacy license
    pub async fn register_pharmacist(
        &self,
        account_id: Uuid,
        registration: PharmacistRegistration,
    ) -> DomainResult<PharmacistCredential> {
        self.check_eligible(
            account_id,
            Role::Pharmacist,
            &registration.pharmacy_license_number,
        )
        .await?;

        let credential = PharmacistCredential::new(
            account_id,
            registration.pharmacy_license_number,
            registration.pharmacy_name,
            registration.pharmacy_branch_location,
        );
        self.credential_repository
            .create(Credential::Pharmacist(credential.clone()))
            .await?;

        Self::log_registered(&account_id, Role::Pharmacist);
        Ok(credential)
    }

    /// The credential record linked to an account, if any
    pub async fn get_credentials(&self, account_id: Uuid) -> DomainResult<Option<Credential>> {
        self.credential_repository.find_by_account(account_id).await
    }

    /// Account exists, is active, has the right role, and owns no record yet;
    /// the license number is unused
    async fn check_eligible(&self, account_id: Uuid, role: Role, license_number: &str) -> DomainResult<Account> {
        let account = self
            .account_repository
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if !account.is_active {
            return Err(AuthError::AccountNotActive.into());
        }
        if !account.has_role(role) {
            return Err(AuthError::RoleMismatch {
                expected: role.to_string(),
            }
            .into());
        }
        if self
            .credential_repository
            .find_by_account(account_id)
            .await?
            .is_some()
        {
            return Err(AuthError::CredentialsAlreadyRegistered.into());
        }
        if self
            .credential_repository
            .license_exists(license_number)
            .await?
        {
            tracing::warn!(
                account_id = %account_id,
                event = "license_conflict",
                "License number already registered"
            );
            return Err(AuthError::LicenseAlreadyRegistered.into());
        }

        Ok(account)
    }

    fn log_registered(account_id: &Uuid, role: Role) {
        tracing::info!(
            account_id = %account_id,
            role = %role,
            event = "credentials_registered",
            "Credentials registered"
        );
    }
}
