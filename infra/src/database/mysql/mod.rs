//! MySQL repository implementations

mod account_repository_impl;
mod credential_repository_impl;
mod sequence_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use credential_repository_impl::MySqlCredentialRepository;
pub use sequence_repository_impl::MySqlSequenceRepository;

use hl_core::errors::DomainError;

/// Wrap a driver error with the operation that produced it
pub(crate) fn db_error(context: &str, err: sqlx::Error) -> DomainError {
    tracing::error!(context, error = %err, "Database operation failed");
    DomainError::internal(format!("Database error ({}): {}", context, err))
}

/// Whether `err` is a duplicate-key error on an index whose name contains `key`
pub(crate) fn is_unique_violation(err: &sqlx::Error, key: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation() && db_err.message().contains(key)
        }
        _ => false,
    }
}
