use async_trait::async_trait;

use super::entity::{AddThread, AddedThread, ThreadRow};
use crate::domain::errors::DomainError;

/// Storage port for threads. Adapters must supply every operation; a missing
/// wiring is a compile error, not a runtime condition.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, new_thread: &AddThread) -> Result<AddedThread, DomainError>;

    /// Fails with `NotFound` when the thread does not exist.
    async fn verify_thread_availability(&self, thread_id: &str) -> Result<(), DomainError>;

    /// Fails with `NotFound` when the thread does not exist.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadRow, DomainError>;
}
