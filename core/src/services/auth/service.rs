//! Main authentication service implementation

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use hl_shared::validation::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::account::{Account, Role};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::health_id::HealthIdAllocator;
use crate::services::token::TokenService;
use crate::services::verification::VerificationService;

use super::hasher::PasswordHasherTrait;
use super::types::{SignupCommand, SignupOutcome};

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service for the signup → verify → login lifecycle
pub struct AuthService {
    /// Account persistence
    account_repository: Arc<dyn AccountRepository>,
    /// Health ID allocation for new accounts
    health_ids: Arc<HealthIdAllocator>,
    /// Code issuance and email delivery
    verification_service: Arc<VerificationService>,
    /// JWT issuance
    token_service: Arc<TokenService>,
    /// Password hashing primitive
    password_hasher: Arc<dyn PasswordHasherTrait>,
}

impl AuthService {
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        health_ids: Arc<HealthIdAllocator>,
        verification_service: Arc<VerificationService>,
        token_service: Arc<TokenService>,
        password_hasher: Arc<dyn PasswordHasherTrait>,
    ) -> Self {
        Self {
            account_repository,
            health_ids,
            verification_service,
            token_service,
            password_hasher,
        }
    }

    /// Register an account, or refresh an unverified one, and email a code
    ///
    /// An active account with the same email is a conflict. An inactive one has
    /// its name, password and role overwritten while keeping its health ID. The
    /// account is persisted before the email goes out, so a delivery failure
    /// leaves a resendable account behind.
    pub async fn signup(&self, command: SignupCommand) -> DomainResult<SignupOutcome> {
        let email = normalize_email(&command.email);
        let name = command.name.trim().to_string();
        Self::validate_signup(&name, &email, &command.password)?;
        let role = command.role.unwrap_or_default();

        let password_hash = self.hash_password(&command.password).await?;
        let code = self.verification_service.issue_code();

        let (account, reused_existing) = match self.account_repository.find_by_email(&email).await? {
            Some(existing) if existing.is_active => {
                tracing::warn!(
                    email = %mask_email(&email),
                    event = "signup_conflict",
                    "Signup attempted for an already active account"
                );
                return Err(AuthError::EmailAlreadyRegistered.into());
            }
            Some(mut existing) => {
                existing.reregister(name, password_hash, role);
                existing.assign_verification_code(&code);
                (self.account_repository.update(existing).await?, true)
            }
            None => {
                let health_id = self.health_ids.allocate(role).await?;
                let mut account = Account::new(name, &email, password_hash, role, health_id.into());
                account.assign_verification_code(&code);
                (self.account_repository.create(account).await?, false)
            }
        };

        tracing::info!(
            email = %mask_email(&account.email),
            health_id = %account.health_id,
            role = %account.role,
            reused_existing,
            event = "otp_generated",
            "Signup recorded, sending verification code"
        );

        self.verification_service
            .deliver_code(&account.email, &code)
            .await?;

        Ok(SignupOutcome {
            account_id: account.id,
            email: account.email,
            health_id: account.health_id,
            role: account.role,
            code_expires_at: code.expires_at,
            reused_existing,
        })
    }

    /// Activate an account with the emailed code
    ///
    /// Checks, in order: account exists, not already active, code not expired,
    /// code matches. Failed checks leave the account untouched.
    pub async fn verify(&self, email: &str, code: &str) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);
        let mut account = self.require_account(&email).await?;

        if let Err(e) = account.check_verification_code(code, Utc::now()) {
            tracing::warn!(
                email = %mask_email(&email),
                reason = %e,
                event = "otp_rejected",
                "Verification failed"
            );
            return Err(e.into());
        }

        account.activate();
        let account = self.account_repository.update(account).await?;

        tracing::info!(
            email = %mask_email(&account.email),
            account_id = %account.id,
            event = "account_activated",
            "Account verified"
        );

        self.verification_service
            .send_welcome(&account.email, &account.name)
            .await;

        let token = self.token_service.issue(&account)?;
        Ok(AuthResponse::from_account(&account, token))
    }

    /// Issue and send a fresh code for an unverified account
    pub async fn resend(&self, email: &str) -> DomainResult<SignupOutcome> {
        let email = normalize_email(email);
        let mut account = self.require_account(&email).await?;

        if account.is_active {
            return Err(AuthError::AccountAlreadyVerified.into());
        }

        let code = self.verification_service.issue_code();
        account.assign_verification_code(&code);
        let account = self.account_repository.update(account).await?;

        tracing::info!(
            email = %mask_email(&account.email),
            event = "otp_regenerated",
            "Verification code reissued"
        );

        self.verification_service
            .deliver_code(&account.email, &code)
            .await?;

        Ok(SignupOutcome {
            account_id: account.id,
            email: account.email,
            health_id: account.health_id,
            role: account.role,
            code_expires_at: code.expires_at,
            reused_existing: true,
        })
    }

    /// Authenticate with email and password
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`. An
    /// inactive account yields `AccountNotActive` whether or not the password
    /// is right.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);
        let account = self
            .account_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.is_active {
            tracing::info!(
                email = %mask_email(&email),
                event = "login_inactive",
                "Login attempted on an unverified account"
            );
            return Err(AuthError::AccountNotActive.into());
        }

        if !self.verify_password(password, &account.password_hash).await? {
            tracing::warn!(
                email = %mask_email(&email),
                event = "login_failed",
                "Invalid password"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(
            account_id = %account.id,
            role = %account.role,
            event = "login_succeeded",
            "Login succeeded"
        );

        let token = self.token_service.issue(&account)?;
        Ok(AuthResponse::from_account(&account, token))
    }

    /// Replace the password after checking the old one
    pub async fn change_password(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let email = normalize_email(email);
        let mut account = self.require_account(&email).await?;

        if !self.verify_password(old_password, &account.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }
        Self::validate_password(new_password)?;

        let password_hash = self.hash_password(new_password).await?;
        account.set_password_hash(password_hash);
        self.account_repository.update(account).await?;

        tracing::info!(
            email = %mask_email(&email),
            event = "password_changed",
            "Password changed"
        );
        Ok(())
    }

    /// Look up an account by id
    pub async fn find_account(&self, account_id: Uuid) -> DomainResult<Account> {
        self.account_repository
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AuthError::AccountNotFound.into())
    }

    async fn require_account(&self, email: &str) -> DomainResult<Account> {
        self.account_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AuthError::AccountNotFound.into())
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        self.password_hasher
            .hash(password)
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
        self.password_hasher
            .verify(password, hash)
            .await
            .map_err(|e| DomainError::internal(format!("Password verification failed: {}", e)))
    }

    fn validate_signup(name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            });
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Self::validate_password(password)
    }

    fn validate_password(password: &str) -> Result<(), ValidationError> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::TooShort {
                field: "password".to_string(),
                min: MIN_PASSWORD_LENGTH,
            });
        }
        Ok(())
    }
}

