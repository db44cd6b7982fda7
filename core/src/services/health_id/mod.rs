//! Health ID allocation
//!
//! Each role draws from its own counter, so patients, doctors and
//! pharmacists are numbered independently (`HL-PNT01`, `HL-DCT01`, ...).

use std::sync::Arc;

use crate::domain::entities::account::Role;
use crate::domain::entities::health_id::HealthId;
use crate::errors::DomainResult;
use crate::repositories::SequenceRepository;

/// Allocates role-prefixed sequential health IDs
pub struct HealthIdAllocator {
    sequences: Arc<dyn SequenceRepository>,
}

impl HealthIdAllocator {
    pub fn new(sequences: Arc<dyn SequenceRepository>) -> Self {
        Self { sequences }
    }

    /// Counter name used for a role
    pub fn sequence_name(role: Role) -> &'static str {
        role.as_str()
    }

    /// Draw the next health ID for a role
    pub async fn allocate(&self, role: Role) -> DomainResult<HealthId> {
        let seq = self
            .sequences
            .next_value(Self::sequence_name(role))
            .await?;
        let health_id = HealthId::format(role, seq);

        tracing::debug!(
            role = %role,
            health_id = %health_id,
            event = "health_id_allocated",
            "Allocated health ID"
        );
        Ok(health_id)
    }
}
