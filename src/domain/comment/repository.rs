use async_trait::async_trait;

use super::entity::{AddComment, AddedComment, CommentRow};
use crate::domain::errors::DomainError;

/// Storage port for comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, new_comment: &AddComment) -> Result<AddedComment, DomainError>;

    /// Fails with `NotFound` when the comment does not exist.
    async fn verify_comment_availability(&self, comment_id: &str) -> Result<(), DomainError>;

    /// Fails with `NotFound` when the comment does not exist and with
    /// `Authorization` when it exists but belongs to someone else.
    async fn verify_comment_owner(&self, comment_id: &str, owner: &str)
    -> Result<(), DomainError>;

    /// Soft delete: sets the deletion flag, the row stays addressable.
    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<(), DomainError>;

    /// Comments of a thread, oldest first, soft-deleted rows included.
    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentRow>, DomainError>;
}
