//! Named monotonic counters used to allocate health IDs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::DomainError;

/// Atomic increment-and-read over a named counter
///
/// The first value returned for a fresh counter is 1. Implementations must
/// never hand out the same value twice for the same name, even under
/// concurrent callers.
#[async_trait]
pub trait SequenceRepository: Send + Sync {
    async fn next_value(&self, name: &str) -> Result<u64, DomainError>;
}

/// In-memory counters guarded by a single async mutex
#[derive(Clone, Default)]
pub struct MockSequenceRepository {
    counters: Arc<Mutex<HashMap<String, u64>>>,
}

impl MockSequenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value without incrementing (0 if never used)
    pub async fn current(&self, name: &str) -> u64 {
        self.counters.lock().await.get(name).copied().unwrap_or(0)
    }
}

#[async_trait]
impl SequenceRepository for MockSequenceRepository {
    async fn next_value(&self, name: &str) -> Result<u64, DomainError> {
        let mut counters = self.counters.lock().await;
        let value = counters.entry(name.to_string()).or_insert(0);
        *value += 1;
        Ok(*value)
    }
}
