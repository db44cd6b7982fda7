//! Credential registry bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hl_core::domain::entities::credential::Credential;
use hl_core::{DoctorRegistration, PharmacistRegistration};

use super::validators::not_blank;

/// `POST /doctor/credentials`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DoctorCredentialRequest {
    #[validate(custom(function = "not_blank"), length(max = 64))]
    pub medical_reg_number: String,
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub specialization: String,
    #[validate(length(max = 255))]
    pub hospital_affiliation: Option<String>,
}

impl From<DoctorCredentialRequest> for DoctorRegistration {
    fn from(request: DoctorCredentialRequest) -> Self {
        Self {
            medical_reg_number: request.medical_reg_number,
            specialization: request.specialization.trim().to_string(),
            hospital_affiliation: request.hospital_affiliation,
        }
    }
}

/// `POST /pharmacist/credentials`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PharmacistCredentialRequest {
    #[validate(custom(function = "not_blank"), length(max = 64))]
    pub pharmacy_license_number: String,
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub pharmacy_name: String,
    #[validate(length(max = 255))]
    pub pharmacy_branch_location: Option<String>,
}

impl From<PharmacistCredentialRequest> for PharmacistRegistration {
    fn from(request: PharmacistCredentialRequest) -> Self {
        Self {
            pharmacy_license_number: request.pharmacy_license_number,
            pharmacy_name: request.pharmacy_name.trim().to_string(),
            pharmacy_branch_location: request.pharmacy_branch_location,
        }
    }
}

/// A stored credential record, tagged by `kind`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CredentialResponse {
    #[serde(rename_all = "camelCase")]
    Doctor {
        id: Uuid,
        account_id: Uuid,
        medical_reg_number: String,
        specialization: String,
        hospital_affiliation: Option<String>,
        is_verified: bool,
        created_at: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    Pharmacist {
        id: Uuid,
        account_id: Uuid,
        pharmacy_license_number: String,
        pharmacy_name: String,
        pharmacy_branch_location: Option<String>,
        is_verified: bool,
        created_at: DateTime<Utc>,
    },
}

impl From<Credential> for CredentialResponse {
    fn from(credential: Credential) -> Self {
        match credential {
            Credential::Doctor(c) => CredentialResponse::Doctor {
                id: c.id,
                account_id: c.account_id,
                medical_reg_number: c.medical_reg_number,
                specialization: c.specialization,
                hospital_affiliation: c.hospital_affiliation,
                is_verified: c.is_verified,
                created_at: c.created_at,
            },
            Credential::Pharmacist(c) => CredentialResponse::Pharmacist {
                id: c.id,
                account_id: c.account_id,
                pharmacy_license_number: c.pharmacy_license_number,
                pharmacy_name: c.pharmacy_name,
                pharmacy_branch_location: c.pharmacy_branch_location,
                is_verified: c.is_verified,
                created_at: c.created_at,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hl_core::domain::entities::credential::DoctorCredential;

    #[test]
    fn test_doctor_response_shape() {
        let credential = Credential::Doctor(DoctorCredential::new(
            Uuid::new_v4(),
            "SLMC-1234".into(),
            "Cardiology".into(),
            None,
        ));

        let json = serde_json::to_value(CredentialResponse::from(credential)).unwrap();
        assert_eq!(json["kind"], "doctor");
        assert_eq!(json["medicalRegNumber"], "SLMC-1234");
        assert_eq!(json["isVerified"], false);
    }

    #[test]
    fn test_blank_license_is_rejected() {
        let request = PharmacistCredentialRequest {
            pharmacy_license_number: "  ".into(),
            pharmacy_name: "City Pharmacy".into(),
            pharmacy_branch_location: None,
        };
        assert!(request.validate().is_err());
    }
}
