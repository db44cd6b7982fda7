//! MySQL implementation of the CredentialRepository trait.
//!
//! Doctor and pharmacist records live in separate tables. Uniqueness of the
//! license number and of the owning account spans both tables, so `create`
//! checks both inside one transaction before inserting; the per-table unique
//! keys back that up under races.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlExecutor, MySqlPool, Row};
use uuid::Uuid;

use hl_core::domain::entities::credential::{
    Credential, DoctorCredential, PharmacistCredential,
};
use hl_core::errors::{AuthError, DomainError};
use hl_core::repositories::CredentialRepository;

use super::{db_error, is_unique_violation};

/// MySQL implementation of CredentialRepository
pub struct MySqlCredentialRepository {
    pool: MySqlPool,
}

impl MySqlCredentialRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn parse_uuid(row: &MySqlRow, column: &str) -> Result<Uuid, DomainError> {
        let raw: String = row.try_get(column).map_err(|e| db_error(column, e))?;
        Uuid::parse_str(&raw)
            .map_err(|e| DomainError::internal(format!("Invalid {} UUID: {}", column, e)))
    }

    fn row_to_doctor(row: &MySqlRow) -> Result<DoctorCredential, DomainError> {
        Ok(DoctorCredential {
            id: Self::parse_uuid(row, "id")?,
            account_id: Self::parse_uuid(row, "account_id")?,
            medical_reg_number: row
                .try_get("medical_reg_number")
                .map_err(|e| db_error("medical_reg_number", e))?,
            specialization: row
                .try_get("specialization")
                .map_err(|e| db_error("specialization", e))?,
            hospital_affiliation: row
                .try_get("hospital_affiliation")
                .map_err(|e| db_error("hospital_affiliation", e))?,
            is_verified: row.try_get("is_verified").map_err(|e| db_error("is_verified", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("created_at", e))?,
        })
    }

    fn row_to_pharmacist(row: &MySqlRow) -> Result<PharmacistCredential, DomainError> {
        Ok(PharmacistCredential {
            id: Self::parse_uuid(row, "id")?,
            account_id: Self::parse_uuid(row, "account_id")?,
            pharmacy_license_number: row
                .try_get("pharmacy_license_number")
                .map_err(|e| db_error("pharmacy_license_number", e))?,
            pharmacy_name: row
                .try_get("pharmacy_name")
                .map_err(|e| db_error("pharmacy_name", e))?,
            pharmacy_branch_location: row
                .try_get("pharmacy_branch_location")
                .map_err(|e| db_error("pharmacy_branch_location", e))?,
            is_verified: row.try_get("is_verified").map_err(|e| db_error("is_verified", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("created_at", e))?,
        })
    }

    async fn exists<'e, E>(executor: E, query: &'e str, value: &'e str) -> Result<bool, DomainError>
    where
        E: MySqlExecutor<'e>,
    {
        let row = sqlx::query(query)
            .bind(value)
            .bind(value)
            .fetch_one(executor)
            .await
            .map_err(|e| db_error("credential existence check", e))?;

        let found: i64 = row.try_get("found").map_err(|e| db_error("found", e))?;
        Ok(found > 0)
    }
}

const LICENSE_EXISTS: &str = r#"
    SELECT
        (SELECT COUNT(*) FROM doctor_credentials WHERE medical_reg_number = ?) +
        (SELECT COUNT(*) FROM pharmacist_credentials WHERE pharmacy_license_number = ?)
        AS found
"#;

const ACCOUNT_HAS_CREDENTIAL: &str = r#"
    SELECT
        (SELECT COUNT(*) FROM doctor_credentials WHERE account_id = ?) +
        (SELECT COUNT(*) FROM pharmacist_credentials WHERE account_id = ?)
        AS found
"#;

#[async_trait]
impl CredentialRepository for MySqlCredentialRepository {
    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<Credential>, DomainError> {
        let id = account_id.to_string();

        let doctor = sqlx::query(
            "SELECT id, account_id, medical_reg_number, specialization, hospital_affiliation, \
             is_verified, created_at FROM doctor_credentials WHERE account_id = ? LIMIT 1",
        )
        .bind(&id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("doctor credential lookup", e))?;

        if let Some(row) = doctor {
            return Ok(Some(Credential::Doctor(Self::row_to_doctor(&row)?)));
        }

        let pharmacist = sqlx::query(
            "SELECT id, account_id, pharmacy_license_number, pharmacy_name, \
             pharmacy_branch_location, is_verified, created_at \
             FROM pharmacist_credentials WHERE account_id = ? LIMIT 1",
        )
        .bind(&id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("pharmacist credential lookup", e))?;

        pharmacist
            .map(|row| Self::row_to_pharmacist(&row).map(Credential::Pharmacist))
            .transpose()
    }

    async fn license_exists(&self, license_number: &str) -> Result<bool, DomainError> {
        Self::exists(&self.pool, LICENSE_EXISTS, license_number.trim()).await
    }

    async fn create(&self, credential: Credential) -> Result<Credential, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("begin transaction", e))?;

        if Self::exists(&mut *tx, LICENSE_EXISTS, credential.license_number()).await? {
            return Err(AuthError::LicenseAlreadyRegistered.into());
        }
        let account_id = credential.account_id().to_string();
        if Self::exists(&mut *tx, ACCOUNT_HAS_CREDENTIAL, &account_id).await? {
            return Err(AuthError::CredentialsAlreadyRegistered.into());
        }

        let result = match &credential {
            Credential::Doctor(c) => {
                sqlx::query(
                    "INSERT INTO doctor_credentials (id, account_id, medical_reg_number, \
                     specialization, hospital_affiliation, is_verified, created_at) \
                     VALUES (?, ?, ?, ?, ?, ?, ?)",
                )
                .bind(c.id.to_string())
                .bind(&account_id)
                .bind(&c.medical_reg_number)
                .bind(&c.specialization)
                .bind(&c.hospital_affiliation)
                .bind(c.is_verified)
                .bind(c.created_at)
                .execute(&mut *tx)
                .await
            }
            Credential::Pharmacist(c) => {
                sqlx::query(
                    "INSERT INTO pharmacist_credentials (id, account_id, pharmacy_license_number, \
                     pharmacy_name, pharmacy_branch_location, is_verified, created_at) \
                     VALUES (?, ?, ?, ?, ?, ?, ?)",
                )
                .bind(c.id.to_string())
                .bind(&account_id)
                .bind(&c.pharmacy_license_number)
                .bind(&c.pharmacy_name)
                .bind(&c.pharmacy_branch_location)
                .bind(c.is_verified)
                .bind(c.created_at)
                .execute(&mut *tx)
                .await
            }
        };

        match result {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e, "license") => {
                return Err(AuthError::LicenseAlreadyRegistered.into())
            }
            Err(e) if is_unique_violation(&e, "account") => {
                return Err(AuthError::CredentialsAlreadyRegistered.into())
            }
            Err(e) => return Err(db_error("insert credential", e)),
        }

        tx.commit()
            .await
            .map_err(|e| db_error("commit transaction", e))?;

        tracing::info!(
            account_id = %credential.account_id(),
            "Credential record stored"
        );
        Ok(credential)
    }
}
