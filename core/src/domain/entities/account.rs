//! Account entity representing a registered HealthLink user.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{AuthError, ValidationError};

use super::verification_code::VerificationCode;

/// Role of an account. Closed set; every account has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Patient,
    Doctor,
    Pharmacist,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Patient, Role::Doctor, Role::Pharmacist];

    /// Wire and storage representation (`PATIENT`, `DOCTOR`, `PHARMACIST`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "PATIENT",
            Role::Doctor => "DOCTOR",
            Role::Pharmacist => "PHARMACIST",
        }
    }

    /// Prefix of health IDs issued to this role
    pub fn health_id_prefix(&self) -> &'static str {
        match self {
            Role::Patient => "HL-PNT",
            Role::Doctor => "HL-DCT",
            Role::Pharmacist => "HL-PHM",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PATIENT" => Ok(Role::Patient),
            "DOCTOR" => Ok(Role::Doctor),
            "PHARMACIST" => Ok(Role::Pharmacist),
            _ => Err(ValidationError::InvalidRole {
                value: s.to_string(),
            }),
        }
    }
}

/// Patient-facing profile fields filled after activation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub nic: Option<String>,
    pub mobile_number: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub allergies: Vec<String>,
    pub marital_status: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_contact: Option<String>,
    /// Base64 data URI
    pub profile_image: Option<String>,
    pub blood_group: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

/// Account entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Normalized (trimmed, lower-cased) email; unique
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    pub role: Role,

    /// Set once the email has been verified
    pub is_active: bool,

    /// Pending one-time code, cleared after successful verification
    pub verification_code: Option<String>,

    pub verification_expires_at: Option<DateTime<Utc>>,

    /// Role-prefixed sequential identifier, assigned once
    pub health_id: String,

    pub profile: ProfileDetails,

    /// Set once the profile has been completed
    pub verification_complete: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new, inactive account
    pub fn new(
        name: String,
        email: &str,
        password_hash: String,
        role: Role,
        health_id: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email: hl_shared::validation::normalize_email(email),
            password_hash,
            role,
            is_active: false,
            verification_code: None,
            verification_expires_at: None,
            health_id,
            profile: ProfileDetails::default(),
            verification_complete: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the mutable signup fields of an unverified account
    ///
    /// The health ID is left untouched even when the role changes.
    pub fn reregister(&mut self, name: String, password_hash: String, role: Role) {
        self.name = name;
        self.password_hash = password_hash;
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Stores a freshly issued code and its expiry
    pub fn assign_verification_code(&mut self, code: &VerificationCode) {
        self.verification_code = Some(code.code.clone());
        self.verification_expires_at = Some(code.expires_at);
        self.updated_at = Utc::now();
    }

    /// Checks a submitted code without mutating the account
    ///
    /// Order: already active, expired, mismatch. A missing expiry counts as expired.
    pub fn check_verification_code(&self, code: &str, now: DateTime<Utc>) -> Result<(), AuthError> {
        if self.is_active {
            return Err(AuthError::AccountAlreadyVerified);
        }

        let expires_at = self
            .verification_expires_at
            .ok_or(AuthError::VerificationCodeExpired)?;
        if now > expires_at {
            return Err(AuthError::VerificationCodeExpired);
        }

        match self.verification_code.as_deref() {
            Some(stored) if VerificationCode::matches(stored, code) => Ok(()),
            _ => Err(AuthError::InvalidVerificationCode),
        }
    }

    /// Flips the account to active and clears the pending code
    pub fn activate(&mut self) {
        self.is_active = true;
        self.verification_code = None;
        self.verification_expires_at = None;
        self.updated_at = Utc::now();
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Replaces the profile and marks it complete
    pub fn complete_profile(&mut self, profile: ProfileDetails) {
        self.profile = profile;
        self.verification_complete = true;
        self.updated_at = Utc::now();
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
