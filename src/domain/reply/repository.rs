use async_trait::async_trait;

use super::entity::{AddReply, AddedReply, ReplyRow};
use crate::domain::errors::DomainError;

/// Storage port for replies, scoped to a parent comment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, new_reply: &AddReply) -> Result<AddedReply, DomainError>;

    /// Fails with `NotFound` when the reply does not exist.
    async fn verify_reply_availability(&self, reply_id: &str) -> Result<(), DomainError>;

    /// Fails with `NotFound` when the reply does not exist and with
    /// `Authorization` when it exists but belongs to someone else.
    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<(), DomainError>;

    /// Soft delete: sets the deletion flag, the row stays addressable.
    async fn delete_reply_by_id(&self, reply_id: &str) -> Result<(), DomainError>;

    /// Replies of a comment, oldest first, soft-deleted rows included.
    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<ReplyRow>, DomainError>;
}
