//! Read models for patient profiles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::{Account, Role};

/// Profile fields exposed to clinicians and the owning patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    pub nic: Option<String>,
    pub mobile_number: Option<String>,
    /// ISO-8601 date (`YYYY-MM-DD`)
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub allergies: Vec<String>,
    pub marital_status: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_contact: Option<String>,
    pub profile_image: Option<String>,
    pub blood_group: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl From<&Account> for PatientProfile {
    fn from(account: &Account) -> Self {
        let p = &account.profile;
        Self {
            nic: p.nic.clone(),
            mobile_number: p.mobile_number.clone(),
            dob: p.dob.map(|d| d.format("%Y-%m-%d").to_string()),
            gender: p.gender.clone(),
            address: p.address.clone(),
            allergies: p.allergies.clone(),
            marital_status: p.marital_status.clone(),
            guardian_name: p.guardian_name.clone(),
            guardian_contact: p.guardian_contact.clone(),
            profile_image: p.profile_image.clone(),
            blood_group: p.blood_group.clone(),
            height: p.height,
            weight: p.weight,
        }
    }
}

/// The caller's own account summary plus profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub health_id: String,
    pub is_active: bool,
    pub is_verification_complete: bool,
    pub profile: PatientProfile,
}

impl From<&Account> for OwnProfile {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
            health_id: account.health_id.clone(),
            is_active: account.is_active,
            is_verification_complete: account.verification_complete,
            profile: PatientProfile::from(account),
        }
    }
}
