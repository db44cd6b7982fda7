//! MySQL-backed named counters for health-ID allocation.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use hl_core::errors::DomainError;
use hl_core::repositories::SequenceRepository;

use super::db_error;

/// Counter rows in the `sequences` table
///
/// The upsert takes the row lock, so the follow-up read inside the same
/// transaction sees exactly the value this caller produced.
pub struct MySqlSequenceRepository {
    pool: MySqlPool,
}

impl MySqlSequenceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceRepository for MySqlSequenceRepository {
    async fn next_value(&self, name: &str) -> Result<u64, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("begin sequence transaction", e))?;

        sqlx::query(
            "INSERT INTO sequences (name, value) VALUES (?, 1) \
             ON DUPLICATE KEY UPDATE value = value + 1",
        )
        .bind(name)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("increment sequence", e))?;

        let row = sqlx::query("SELECT value FROM sequences WHERE name = ?")
            .bind(name)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| db_error("read sequence", e))?;

        let value: u64 = row.try_get("value").map_err(|e| db_error("value", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("commit sequence transaction", e))?;

        tracing::debug!(sequence = name, value, "Sequence advanced");
        Ok(value)
    }
}
