//! MySQL implementation of the AccountRepository trait.
//!
//! Profile fields are flattened into the `accounts` table; allergies are
//! stored as a JSON array.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hl_core::domain::entities::account::{Account, ProfileDetails, Role};
use hl_core::errors::{AuthError, DomainError};
use hl_core::repositories::AccountRepository;

use super::{db_error, is_unique_violation};

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, email, password_hash, role, is_active,
           verification_code, verification_expires_at, health_id,
           nic, mobile_number, dob, gender, address, allergies,
           marital_status, guardian_name, guardian_contact, profile_image,
           blood_group, height, weight, verification_complete,
           created_at, updated_at
    FROM accounts
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &MySqlRow) -> Result<Account, DomainError> {
        let id: String = row.try_get("id").map_err(|e| db_error("id", e))?;
        let role: String = row.try_get("role").map_err(|e| db_error("role", e))?;
        let allergies: Option<Json<Vec<String>>> = row
            .try_get("allergies")
            .map_err(|e| db_error("allergies", e))?;

        let profile = ProfileDetails {
            nic: row.try_get("nic").map_err(|e| db_error("nic", e))?,
            mobile_number: row
                .try_get("mobile_number")
                .map_err(|e| db_error("mobile_number", e))?,
            dob: row
                .try_get::<Option<NaiveDate>, _>("dob")
                .map_err(|e| db_error("dob", e))?,
            gender: row.try_get("gender").map_err(|e| db_error("gender", e))?,
            address: row.try_get("address").map_err(|e| db_error("address", e))?,
            allergies: allergies.map(|json| json.0).unwrap_or_default(),
            marital_status: row
                .try_get("marital_status")
                .map_err(|e| db_error("marital_status", e))?,
            guardian_name: row
                .try_get("guardian_name")
                .map_err(|e| db_error("guardian_name", e))?,
            guardian_contact: row
                .try_get("guardian_contact")
                .map_err(|e| db_error("guardian_contact", e))?,
            profile_image: row
                .try_get("profile_image")
                .map_err(|e| db_error("profile_image", e))?,
            blood_group: row
                .try_get("blood_group")
                .map_err(|e| db_error("blood_group", e))?,
            height: row.try_get("height").map_err(|e| db_error("height", e))?,
            weight: row.try_get("weight").map_err(|e| db_error("weight", e))?,
        };

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid account UUID: {}", e)))?,
            name: row.try_get("name").map_err(|e| db_error("name", e))?,
            email: row.try_get("email").map_err(|e| db_error("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_error("password_hash", e))?,
            role: role
                .parse::<Role>()
                .map_err(|e| DomainError::internal(format!("Stored role is invalid: {}", e)))?,
            is_active: row.try_get("is_active").map_err(|e| db_error("is_active", e))?,
            verification_code: row
                .try_get("verification_code")
                .map_err(|e| db_error("verification_code", e))?,
            verification_expires_at: row
                .try_get::<Option<DateTime<Utc>>, _>("verification_expires_at")
                .map_err(|e| db_error("verification_expires_at", e))?,
            health_id: row.try_get("health_id").map_err(|e| db_error("health_id", e))?,
            profile,
            verification_complete: row
                .try_get("verification_complete")
                .map_err(|e| db_error("verification_complete", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("updated_at", e))?,
        })
    }

    async fn fetch_one_where(
        &self,
        clause: &str,
        value: String,
    ) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE {} = ? LIMIT 1", SELECT_COLUMNS, clause);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("account lookup", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.fetch_one_where("email", email.to_string()).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        self.fetch_one_where("id", id.to_string()).await
    }

    async fn find_by_health_id(&self, health_id: &str) -> Result<Option<Account>, DomainError> {
        self.fetch_one_where("health_id", health_id.to_string()).await
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, name, email, password_hash, role, is_active,
                verification_code, verification_expires_at, health_id,
                nic, mobile_number, dob, gender, address, allergies,
                marital_status, guardian_name, guardian_contact, profile_image,
                blood_group, height, weight, verification_complete,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let profile = &account.profile;
        let result = sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.role.as_str())
            .bind(account.is_active)
            .bind(&account.verification_code)
            .bind(account.verification_expires_at)
            .bind(&account.health_id)
            .bind(&profile.nic)
            .bind(&profile.mobile_number)
            .bind(profile.dob)
            .bind(&profile.gender)
            .bind(&profile.address)
            .bind(Json(&profile.allergies))
            .bind(&profile.marital_status)
            .bind(&profile.guardian_name)
            .bind(&profile.guardian_contact)
            .bind(&profile.profile_image)
            .bind(&profile.blood_group)
            .bind(profile.height)
            .bind(profile.weight)
            .bind(account.verification_complete)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(account),
            Err(e) if is_unique_violation(&e, "email") => {
                Err(AuthError::EmailAlreadyRegistered.into())
            }
            Err(e) => Err(db_error("insert account", e)),
        }
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts SET
                name = ?, password_hash = ?, role = ?, is_active = ?,
                verification_code = ?, verification_expires_at = ?,
                nic = ?, mobile_number = ?, dob = ?, gender = ?, address = ?,
                allergies = ?, marital_status = ?, guardian_name = ?,
                guardian_contact = ?, profile_image = ?, blood_group = ?,
                height = ?, weight = ?, verification_complete = ?, updated_at = ?
            WHERE id = ?
        "#;

        let profile = &account.profile;
        let result = sqlx::query(query)
            .bind(&account.name)
            .bind(&account.password_hash)
            .bind(account.role.as_str())
            .bind(account.is_active)
            .bind(&account.verification_code)
            .bind(account.verification_expires_at)
            .bind(&profile.nic)
            .bind(&profile.mobile_number)
            .bind(profile.dob)
            .bind(&profile.gender)
            .bind(&profile.address)
            .bind(Json(&profile.allergies))
            .bind(&profile.marital_status)
            .bind(&profile.guardian_name)
            .bind(&profile.guardian_contact)
            .bind(&profile.profile_image)
            .bind(&profile.blood_group)
            .bind(profile.height)
            .bind(profile.weight)
            .bind(account.verification_complete)
            .bind(account.updated_at)
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update account", e))?;

        // MySQL reports matched-but-unchanged rows as 0 affected, so confirm
        // existence before treating that as a miss.
        if result.rows_affected() == 0 && self.find_by_id(account.id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: format!("account {}", account.id),
            });
        }

        Ok(account)
    }
}
