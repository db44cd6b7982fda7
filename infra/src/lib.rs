//! # Infrastructure Layer
//!
//! Concrete implementations of the seams declared in `hl_core`:
//! - **Database**: MySQL repositories for accounts, health-ID counters and
//!   professional credentials (SQLx), plus embedded migrations
//! - **Mail**: verification / welcome email templates and the `mock` and
//!   `http` transports
//! - **Security**: bcrypt password hasher
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use hl_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Mail module - transactional email transports and templates
pub mod mail;

/// Security module - password hashing
pub mod security;

#[cfg(feature = "mysql")]
pub use database::{
    DatabasePool, MySqlAccountRepository, MySqlCredentialRepository, MySqlSequenceRepository,
};
pub use mail::{create_mail_service, HttpMailService, MockMailService};
pub use security::BcryptPasswordHasher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail delivery error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::internal(err.to_string())
    }
}
