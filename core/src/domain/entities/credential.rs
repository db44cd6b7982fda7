//! Professional credential records linked to doctor and pharmacist accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Doctor registration details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorCredential {
    pub id: Uuid,
    pub account_id: Uuid,
    /// Medical council registration number; unique
    pub medical_reg_number: String,
    pub specialization: String,
    pub hospital_affiliation: Option<String>,
    /// Flipped by an out-of-band review; false on creation
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl DoctorCredential {
    pub fn new(
        account_id: Uuid,
        medical_reg_number: String,
        specialization: String,
        hospital_affiliation: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            medical_reg_number: medical_reg_number.trim().to_string(),
            specialization,
            hospital_affiliation,
            is_verified: false,
            created_at: Utc::now(),
        }
    }
}

/// Pharmacist registration details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacistCredential {
    pub id: Uuid,
    pub account_id: Uuid,
    /// Pharmacy license number; unique
    pub pharmacy_license_number: String,
    pub pharmacy_name: String,
    pub pharmacy_branch_location: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl PharmacistCredential {
    pub fn new(
        account_id: Uuid,
        pharmacy_license_number: String,
        pharmacy_name: String,
        pharmacy_branch_location: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            pharmacy_license_number: pharmacy_license_number.trim().to_string(),
            pharmacy_name,
            pharmacy_branch_location,
            is_verified: false,
            created_at: Utc::now(),
        }
    }
}

/// Either kind of credential record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Credential {
    Doctor(DoctorCredential),
    Pharmacist(PharmacistCredential),
}

impl Credential {
    pub fn account_id(&self) -> Uuid {
        match self {
            Credential::Doctor(c) => c.account_id,
            Credential::Pharmacist(c) => c.account_id,
        }
    }

    /// The unique license or registration number
    pub fn license_number(&self) -> &str {
        match self {
            Credential::Doctor(c) => &c.medical_reg_number,
            Credential::Pharmacist(c) => &c.pharmacy_license_number,
        }
    }

    pub fn is_verified(&self) -> bool {
        match self {
            Credential::Doctor(c) => c.is_verified,
            Credential::Pharmacist(c) => c.is_verified,
        }
    }
}
